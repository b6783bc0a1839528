// speak-specific configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tts_client::Provider;

/// Per-user defaults; credentials never live here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakConfig {
    /// Provider used when --provider is not given
    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub openai: ProviderDefaults,

    #[serde(default)]
    pub elevenlabs: ProviderDefaults,

    #[serde(default)]
    pub deepgram: ProviderDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDefaults {
    pub voice: Option<String>,
    pub model: Option<String>,
}

impl SpeakConfig {
    /// Get the config file path: ~/.config/cli-programs/speak.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("speak.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SpeakConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn defaults_for(&self, provider: Provider) -> &ProviderDefaults {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::ElevenLabs => &self.elevenlabs,
            Provider::Deepgram => &self.deepgram,
        }
    }
}
