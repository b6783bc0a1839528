//! Deepgram Aura speak endpoint
//!
//! Deepgram has no separate model parameter: the voice *is* the model and
//! goes in the query string together with the encoding. There is no speed
//! control.

use serde::Serialize;

use crate::error::Result;
use crate::provider::{
    AuthScheme, Provider, ProviderProfile, SpeedPolicy, VoicePolicy, VoicePreset,
};
use crate::request::{self, RequestDescriptor, SynthesisRequest};

pub const API_URL: &str = "https://api.deepgram.com/v1/speak";

const PRESETS: &[VoicePreset] = &[
    // Aura
    VoicePreset::new("asteria", "aura-asteria-en"),
    VoicePreset::new("luna", "aura-luna-en"),
    VoicePreset::new("stella", "aura-stella-en"),
    VoicePreset::new("athena", "aura-athena-en"),
    VoicePreset::new("hera", "aura-hera-en"),
    VoicePreset::new("orion", "aura-orion-en"),
    VoicePreset::new("arcas", "aura-arcas-en"),
    VoicePreset::new("perseus", "aura-perseus-en"),
    VoicePreset::new("angus", "aura-angus-en"),
    VoicePreset::new("orpheus", "aura-orpheus-en"),
    VoicePreset::new("helios", "aura-helios-en"),
    VoicePreset::new("zeus", "aura-zeus-en"),
    // Aura 2
    VoicePreset::new("thalia", "aura-2-thalia-en"),
    VoicePreset::new("andromeda", "aura-2-andromeda-en"),
    VoicePreset::new("helena", "aura-2-helena-en"),
    VoicePreset::new("jason", "aura-2-jason-en"),
    VoicePreset::new("apollo", "aura-2-apollo-en"),
    VoicePreset::new("ares", "aura-2-ares-en"),
];

pub fn profile() -> ProviderProfile {
    ProviderProfile {
        provider: Provider::Deepgram,
        display_name: "Deepgram",
        api_url: API_URL,
        auth: AuthScheme::Token,
        env_var: "DEEPGRAM_API_KEY",
        default_voice: "aura-asteria-en",
        default_model: None,
        models: &[],
        speed_policy: SpeedPolicy::Ignored,
        voice_policy: VoicePolicy::Passthrough,
        supports_tuning: false,
        supports_voice_demo: false,
        presets: PRESETS,
    }
}

#[derive(Debug, Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
}

pub(crate) fn build_request(
    profile: &ProviderProfile,
    request: &SynthesisRequest,
    api_key: &str,
) -> Result<RequestDescriptor> {
    let mut url = request::endpoint(profile)?;
    url.query_pairs_mut()
        .append_pair("model", &request.voice)
        .append_pair("encoding", "mp3");

    let payload = SpeakRequest {
        text: &request.text,
    };

    RequestDescriptor::json(profile, url, api_key, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::VoiceTuning;
    use serde_json::json;

    #[test]
    fn test_build_request() {
        let request = SynthesisRequest {
            voice: "aura-luna-en".to_string(),
            model: None,
            text: "Hello from Deepgram".to_string(),
            speed: None,
            tuning: VoiceTuning::default(),
        };
        let descriptor = build_request(&profile(), &request, "dg-test").unwrap();

        assert_eq!(
            descriptor.url.as_str(),
            "https://api.deepgram.com/v1/speak?model=aura-luna-en&encoding=mp3"
        );
        assert_eq!(descriptor.header("Authorization"), Some("Token dg-test"));
        assert_eq!(descriptor.body, json!({ "text": "Hello from Deepgram" }));
    }

    #[test]
    fn test_speed_never_reaches_the_body() {
        let request = SynthesisRequest {
            voice: "aura-asteria-en".to_string(),
            model: None,
            text: "Fast".to_string(),
            speed: Some(2.0),
            tuning: VoiceTuning::default(),
        };
        let descriptor = build_request(&profile(), &request, "k").unwrap();
        assert_eq!(descriptor.body, json!({ "text": "Fast" }));
    }
}
