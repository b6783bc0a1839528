//! ElevenLabs text-to-speech endpoint
//!
//! The voice id travels in the URL path and the output format is pinned to
//! 44.1 kHz / 128 kbps MP3 so playback is the same as for other providers.

use serde::Serialize;

use crate::error::{Result, TtsError};
use crate::provider::{
    AuthScheme, Provider, ProviderProfile, SpeedPolicy, VoicePolicy, VoicePreset,
};
use crate::request::{self, RequestDescriptor, SynthesisRequest};

pub const API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

const PRESETS: &[VoicePreset] = &[
    VoicePreset::new("rachel", "21m00Tcm4TlvDq8ikWAM"),
    VoicePreset::new("domi", "AZnzlk1XvdvUeBnXmlld"),
    VoicePreset::new("bella", "EXAVITQu4vr4xnSDxMaL"),
    VoicePreset::new("antoni", "ErXwobaYiN019PkySvjV"),
    VoicePreset::new("elli", "MF3mGyEYCl7XYWbV9V6O"),
    VoicePreset::new("josh", "TxGEqnHWrfWFTfGW9XjX"),
    VoicePreset::new("arnold", "VR6AewLTigWG4xSOukaG"),
    VoicePreset::new("adam", "pNInz6obpgDQGcFmaJgB"),
    VoicePreset::new("sam", "yoZ06aMxZJJ28mfd3POQ"),
    VoicePreset::new("george", "JBFqnCBsd6RMkjVDRZzb"),
    VoicePreset::new("charlie", "IKne3meq5aSn9XLyUdCD"),
    VoicePreset::new("emily", "LcfcDJNUP1GQjkzn1xUU"),
    VoicePreset::new("lily", "pFZP5JQG7iQjIQuC4Bku"),
    VoicePreset::new("michael", "flq6f7yk4E4fJM5XTYuZ"),
];

pub fn profile() -> ProviderProfile {
    ProviderProfile {
        provider: Provider::ElevenLabs,
        display_name: "ElevenLabs",
        api_url: API_URL,
        auth: AuthScheme::ApiKeyHeader("xi-api-key"),
        env_var: "ELEVENLABS_API_KEY",
        default_voice: "rachel",
        default_model: Some("eleven_multilingual_v2"),
        models: &[
            "eleven_multilingual_v2",
            "eleven_turbo_v2_5",
            "eleven_turbo_v2",
            "eleven_monolingual_v1",
        ],
        speed_policy: SpeedPolicy::Range { min: 0.7, max: 1.2 },
        voice_policy: VoicePolicy::Passthrough,
        supports_tuning: true,
        supports_voice_demo: false,
        presets: PRESETS,
    }
}

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

pub(crate) fn build_request(
    profile: &ProviderProfile,
    request: &SynthesisRequest,
    api_key: &str,
) -> Result<RequestDescriptor> {
    let mut url = request::endpoint(profile)?;
    url.path_segments_mut()
        .map_err(|_| TtsError::InvalidEndpoint(profile.api_url.to_string()))?
        .pop_if_empty()
        .push(&request.voice);
    url.query_pairs_mut()
        .append_pair("output_format", OUTPUT_FORMAT);

    let payload = TextToSpeechRequest {
        text: &request.text,
        model_id: request
            .model
            .as_deref()
            .or(profile.default_model)
            .unwrap_or_default(),
        voice_settings: VoiceSettings {
            stability: request.tuning.stability,
            similarity_boost: request.tuning.similarity_boost,
            speed: request.speed,
        },
    };

    RequestDescriptor::json(profile, url, api_key, &payload)
}
