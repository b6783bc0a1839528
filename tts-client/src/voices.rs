//! Voice name resolution

use crate::provider::{ProviderProfile, VoicePreset};

/// Find a preset by name, ignoring case
pub fn find_preset<'a>(profile: &'a ProviderProfile, name: &str) -> Option<&'a VoicePreset> {
    profile
        .presets
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Resolve a voice name to the identifier the provider expects.
///
/// Preset names match case-insensitively. Anything else is returned
/// unchanged and treated as a provider-native identifier (a custom voice id
/// or a full model name); the provider decides whether it exists.
pub fn resolve(profile: &ProviderProfile, raw: &str) -> String {
    match find_preset(profile, raw) {
        Some(preset) => preset.id.to_string(),
        None => raw.to_string(),
    }
}

/// Preset names in declared order
pub fn preset_names(profile: &ProviderProfile) -> Vec<&'static str> {
    profile.presets.iter().map(|preset| preset.name).collect()
}
