//! Provider-neutral synthesis requests and transport-ready descriptors

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::error::{Result, TtsError};
use crate::provider::ProviderProfile;

/// Stability/similarity knobs for providers that support voice settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceTuning {
    pub stability: f64,
    pub similarity_boost: f64,
}

impl Default for VoiceTuning {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// One validated synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Provider-native voice identifier (already resolved)
    pub voice: String,
    /// `None` for providers without a model concept
    pub model: Option<String>,
    pub text: String,
    /// `None` when the provider ignores speed
    pub speed: Option<f64>,
    pub tuning: VoiceTuning,
}

impl SynthesisRequest {
    /// Same parameters with a different voice and text
    pub fn for_voice(&self, voice: &str, text: &str) -> Self {
        Self {
            voice: voice.to_string(),
            text: text.to_string(),
            ..self.clone()
        }
    }
}

/// HTTP request ready to hand to the executor. Always a JSON POST.
#[derive(Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: serde_json::Value,
}

impl RequestDescriptor {
    /// Create a JSON POST descriptor authenticated with the profile's scheme
    pub fn json<T: Serialize>(
        profile: &ProviderProfile,
        url: Url,
        api_key: &str,
        payload: &T,
    ) -> Result<Self> {
        Ok(Self {
            url,
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                profile.auth.header(api_key),
            ],
            body: serde_json::to_value(payload)?,
        })
    }

    /// Value of the first header named `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Header values carry credentials, so only names are printed
impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("url", &self.url.as_str())
            .field(
                "headers",
                &self.headers.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            )
            .field("body", &self.body)
            .finish()
    }
}

/// Parse a profile's base URL
pub(crate) fn endpoint(profile: &ProviderProfile) -> Result<Url> {
    Url::parse(profile.api_url)
        .map_err(|e| TtsError::InvalidEndpoint(format!("{}: {}", profile.api_url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::openai;

    #[test]
    fn test_debug_hides_credentials() {
        let profile = openai::profile();
        let descriptor = RequestDescriptor::json(
            &profile,
            endpoint(&profile).unwrap(),
            "sk-secret",
            &serde_json::json!({"input": "hi"}),
        )
        .unwrap();

        let printed = format!("{:?}", descriptor);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("Authorization"));
        assert_eq!(descriptor.header("authorization"), Some("Bearer sk-secret"));
        assert_eq!(descriptor.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_for_voice_keeps_other_settings() {
        let request = SynthesisRequest {
            voice: "alloy".to_string(),
            model: Some("tts-1".to_string()),
            text: "Hello".to_string(),
            speed: Some(1.5),
            tuning: VoiceTuning::default(),
        };
        let echo = request.for_voice("echo", "echo");
        assert_eq!(echo.voice, "echo");
        assert_eq!(echo.text, "echo");
        assert_eq!(echo.model.as_deref(), Some("tts-1"));
        assert_eq!(echo.speed, Some(1.5));
    }

    #[test]
    fn test_bad_endpoint_is_reported() {
        let mut profile = openai::profile();
        profile.api_url = "not a url";
        let err = endpoint(&profile).unwrap_err();
        assert!(err.to_string().starts_with("Invalid endpoint: not a url"));
    }
}
