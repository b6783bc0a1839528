// Provider details shown by --help and --list-voices

use tts_client::{ProviderCatalog, ProviderProfile, SpeedPolicy, VoicePolicy};

const EXAMPLES: &str = r#"
EXAMPLES:
    # Speak with the default provider and voice
    speak "Hello world"

    # Read text from stdin
    echo "Hello from a pipe" | speak

    # Pick a provider and voice
    speak -p elevenlabs -v bella "Hello"

    # Save to a file without playing it, or save and play
    speak -o hello.mp3 "Saved, not played"
    speak -o hello.mp3 -s "Saved and played"

    # Hear every OpenAI voice in turn
    speak --all "Which voice do you like?"
"#;

/// Help text describing every provider in the catalog
pub fn provider_details(catalog: &ProviderCatalog) -> String {
    let mut out = String::from("PROVIDERS:\n");
    for profile in catalog.profiles() {
        out.push_str(&provider_section(profile));
    }
    out.push_str(EXAMPLES);
    out
}

fn provider_section(profile: &ProviderProfile) -> String {
    let mut out = format!("    {} ({})\n", profile.provider, profile.display_name);
    out.push_str(&format!("        Env var: {}\n", profile.env_var));

    let names: Vec<&str> = profile.presets.iter().map(|p| p.name).collect();
    out.push_str(&format!(
        "        Voices:  {} (default: {})\n",
        names.join(", "),
        profile.default_voice
    ));
    if profile.voice_policy == VoicePolicy::Passthrough {
        out.push_str("                 Any other value is sent as a voice ID\n");
    }

    if let Some(default_model) = profile.default_model {
        out.push_str(&format!(
            "        Models:  {} (default: {})\n",
            profile.models.join(", "),
            default_model
        ));
    }

    match profile.speed_policy {
        SpeedPolicy::Range { min, max } => {
            out.push_str(&format!("        Speed:   {:?} to {:?}\n", min, max));
        }
        SpeedPolicy::Ignored => out.push_str("        Speed adjustment not supported\n"),
    }

    if profile.supports_tuning {
        out.push_str("        Tuning:  --stability, --similarity (0.0 to 1.0)\n");
    }
    if profile.supports_voice_demo {
        out.push_str("        Supports --all\n");
    }
    out
}

/// One preset per line, with the provider identifier when it differs
pub fn voice_list(profile: &ProviderProfile) -> String {
    let width = profile
        .presets
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for preset in profile.presets {
        let mut line = if preset.id == preset.name {
            preset.name.to_string()
        } else {
            format!("{:<width$}  {}", preset.name, preset.id, width = width)
        };
        if preset.name == profile.default_voice || preset.id == profile.default_voice {
            line.push_str("  (default)");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
