//! Provider identities and their static profiles
//!
//! Every supported provider is described by a [`ProviderProfile`]: where its
//! API lives, how it authenticates, which voices it knows and how it treats
//! speed. Profiles are collected once into a [`ProviderCatalog`] which is
//! handed to the dispatcher.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TtsError};
use crate::providers::{deepgram, elevenlabs, openai};
use crate::request::{RequestDescriptor, SynthesisRequest};
use crate::voices;

/// The closed set of supported TTS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    #[default]
    OpenAi,
    ElevenLabs,
    Deepgram,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::ElevenLabs, Provider::Deepgram];

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::ElevenLabs => "elevenlabs",
            Provider::Deepgram => "deepgram",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| TtsError::InvalidProvider {
                name,
                valid: Provider::ALL.map(|p| p.as_str()).join(", "),
            })
    }
}

/// How a provider treats the speed parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedPolicy {
    /// Speed is sent with every request and must lie within `[min, max]`
    Range { min: f64, max: f64 },
    /// The provider has no speed control; non-default values are dropped with a warning
    Ignored,
}

/// Whether unknown voice names are accepted as provider-native identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePolicy {
    /// Only preset names are valid
    Closed,
    /// Unknown names are forwarded unchanged
    Passthrough,
}

/// Credential header scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `Authorization: Token <key>`
    Token,
    /// `<header>: <key>`
    ApiKeyHeader(&'static str),
}

impl AuthScheme {
    /// Header name and value carrying `api_key`
    pub fn header(&self, api_key: &str) -> (&'static str, String) {
        match self {
            AuthScheme::Bearer => ("Authorization", format!("Bearer {}", api_key)),
            AuthScheme::Token => ("Authorization", format!("Token {}", api_key)),
            AuthScheme::ApiKeyHeader(name) => (name, api_key.to_string()),
        }
    }
}

/// A short voice alias and the identifier the provider expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    pub name: &'static str,
    pub id: &'static str,
}

impl VoicePreset {
    pub const fn new(name: &'static str, id: &'static str) -> Self {
        Self { name, id }
    }
}

/// Static description of one provider
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub provider: Provider,
    /// Human-readable name used in messages
    pub display_name: &'static str,
    pub api_url: &'static str,
    pub auth: AuthScheme,
    /// Environment variable holding the API key
    pub env_var: &'static str,
    pub default_voice: &'static str,
    /// `None` for providers without a separate model concept
    pub default_model: Option<&'static str>,
    /// Known models, listed in help output only
    pub models: &'static [&'static str],
    pub speed_policy: SpeedPolicy,
    pub voice_policy: VoicePolicy,
    /// Accepts the stability/similarity voice settings
    pub supports_tuning: bool,
    /// Eligible for speaking with every preset voice
    pub supports_voice_demo: bool,
    /// Presets in declared order
    pub presets: &'static [VoicePreset],
}

impl ProviderProfile {
    /// Map a voice name to the provider's identifier, passing unknown names through
    pub fn resolve_voice(&self, raw: &str) -> String {
        voices::resolve(self, raw)
    }

    /// Build the transport-ready request for this provider
    pub fn build_request(
        &self,
        request: &SynthesisRequest,
        api_key: &str,
    ) -> Result<RequestDescriptor> {
        match self.provider {
            Provider::OpenAi => openai::build_request(self, request, api_key),
            Provider::ElevenLabs => elevenlabs::build_request(self, request, api_key),
            Provider::Deepgram => deepgram::build_request(self, request, api_key),
        }
    }
}

/// Immutable set of provider profiles, created once at startup
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    pub(crate) profiles: Vec<ProviderProfile>,
}

impl ProviderCatalog {
    /// Catalog with the built-in OpenAI, ElevenLabs and Deepgram profiles
    pub fn builtin() -> Self {
        Self {
            profiles: vec![openai::profile(), elevenlabs::profile(), deepgram::profile()],
        }
    }

    pub fn profile(&self, provider: Provider) -> Result<&ProviderProfile> {
        self.profiles
            .iter()
            .find(|p| p.provider == provider)
            .ok_or_else(|| TtsError::InvalidProvider {
                name: provider.to_string(),
                valid: self.names().join(", "),
            })
    }

    /// Look up a profile by command-line name (case-insensitive)
    pub fn lookup(&self, name: &str) -> Result<&ProviderProfile> {
        self.profile(name.parse()?)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ProviderProfile> {
        self.profiles.iter()
    }

    fn names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.provider.as_str()).collect()
    }
}
