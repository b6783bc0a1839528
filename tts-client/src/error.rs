use std::path::PathBuf;
use thiserror::Error;

/// Result type for tts-client operations
pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors that can occur while resolving, synthesizing or delivering speech
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Invalid provider '{name}'. Use one of: {valid}")]
    InvalidProvider { name: String, valid: String },

    #[error("Invalid {provider} voice '{voice}'. Valid voices: {valid}")]
    InvalidVoice {
        provider: &'static str,
        voice: String,
        valid: String,
    },

    #[error("Speed must be between {min:?} and {max:?} for {provider} (got {speed})")]
    SpeedOutOfRange {
        provider: &'static str,
        speed: f64,
        min: f64,
        max: f64,
    },

    #[error("{setting} must be between 0.0 and 1.0 (got {value})")]
    TuningOutOfRange { setting: &'static str, value: f64 },

    #[error("{env_var} environment variable not set and --token not provided")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("No text provided")]
    MissingText,

    #[error("{0}")]
    UnsupportedOption(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to make request: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to play audio: {0}")]
    Playback(String),

    #[error("Failed to save audio to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TtsError {
    /// Whether this error comes from invalid input rather than the network or audio device.
    ///
    /// Configuration errors are always raised before any request is sent.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TtsError::InvalidProvider { .. }
                | TtsError::InvalidVoice { .. }
                | TtsError::SpeedOutOfRange { .. }
                | TtsError::TuningOutOfRange { .. }
                | TtsError::MissingApiKey { .. }
                | TtsError::MissingText
                | TtsError::UnsupportedOption(_)
        )
    }
}

/// Render an error followed by each of its sources, joined by ": "
pub(crate) fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
