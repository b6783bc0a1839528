//! OpenAI speech endpoint

use serde::Serialize;

use crate::error::Result;
use crate::provider::{
    AuthScheme, Provider, ProviderProfile, SpeedPolicy, VoicePolicy, VoicePreset,
};
use crate::request::{self, RequestDescriptor, SynthesisRequest};

pub const API_URL: &str = "https://api.openai.com/v1/audio/speech";

const PRESETS: &[VoicePreset] = &[
    VoicePreset::new("alloy", "alloy"),
    VoicePreset::new("echo", "echo"),
    VoicePreset::new("fable", "fable"),
    VoicePreset::new("onyx", "onyx"),
    VoicePreset::new("nova", "nova"),
    VoicePreset::new("shimmer", "shimmer"),
];

pub fn profile() -> ProviderProfile {
    ProviderProfile {
        provider: Provider::OpenAi,
        display_name: "OpenAI",
        api_url: API_URL,
        auth: AuthScheme::Bearer,
        env_var: "OPENAI_API_KEY",
        default_voice: "alloy",
        default_model: Some("tts-1-hd"),
        models: &["tts-1", "tts-1-hd"],
        speed_policy: SpeedPolicy::Range {
            min: 0.25,
            max: 4.0,
        },
        voice_policy: VoicePolicy::Closed,
        supports_tuning: false,
        supports_voice_demo: true,
        presets: PRESETS,
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

pub(crate) fn build_request(
    profile: &ProviderProfile,
    request: &SynthesisRequest,
    api_key: &str,
) -> Result<RequestDescriptor> {
    let payload = SpeechRequest {
        model: request
            .model
            .as_deref()
            .or(profile.default_model)
            .unwrap_or_default(),
        input: &request.text,
        voice: &request.voice,
        response_format: "mp3",
        speed: request.speed,
    };

    RequestDescriptor::json(profile, request::endpoint(profile)?, api_key, &payload)
}
