//! Provider-specific parameter validation

use crate::error::{Result, TtsError};
use crate::provider::{ProviderProfile, SpeedPolicy, VoicePolicy};
use crate::request::VoiceTuning;
use crate::voices;

/// Speed every provider treats as "unchanged"
pub const DEFAULT_SPEED: f64 = 1.0;

/// Outcome of checking a requested speed against a provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedSetting {
    /// Sent with the request
    Apply(f64),
    /// Provider has no speed control and a non-default speed was asked for
    Ignored { requested: f64 },
    /// Provider has no speed control and the default was asked for
    Unused,
}

impl SpeedSetting {
    /// Speed to put on the wire, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            SpeedSetting::Apply(speed) => Some(*speed),
            SpeedSetting::Ignored { .. } | SpeedSetting::Unused => None,
        }
    }
}

/// Check `speed` against the provider's speed policy.
///
/// Range bounds are inclusive. NaN is rejected by range-enforcing providers.
pub fn validate_speed(profile: &ProviderProfile, speed: f64) -> Result<SpeedSetting> {
    match profile.speed_policy {
        SpeedPolicy::Range { min, max } => {
            if (min..=max).contains(&speed) {
                Ok(SpeedSetting::Apply(speed))
            } else {
                Err(TtsError::SpeedOutOfRange {
                    provider: profile.display_name,
                    speed,
                    min,
                    max,
                })
            }
        }
        SpeedPolicy::Ignored if speed == DEFAULT_SPEED => Ok(SpeedSetting::Unused),
        SpeedPolicy::Ignored => Ok(SpeedSetting::Ignored { requested: speed }),
    }
}

/// Check stability and similarity boost, both in `[0.0, 1.0]`
pub fn validate_tuning(tuning: &VoiceTuning) -> Result<()> {
    for (setting, value) in [
        ("Stability", tuning.stability),
        ("Similarity boost", tuning.similarity_boost),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(TtsError::TuningOutOfRange { setting, value });
        }
    }
    Ok(())
}

/// Reject unknown voices for providers with a closed preset list
pub fn validate_voice(profile: &ProviderProfile, voice: &str) -> Result<()> {
    match profile.voice_policy {
        VoicePolicy::Passthrough => Ok(()),
        VoicePolicy::Closed if voices::find_preset(profile, voice).is_some() => Ok(()),
        VoicePolicy::Closed => Err(TtsError::InvalidVoice {
            provider: profile.display_name,
            voice: voice.to_string(),
            valid: voices::preset_names(profile).join(", "),
        }),
    }
}
