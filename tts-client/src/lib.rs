//! Text-to-speech provider client
//!
//! Resolves voices and parameters for OpenAI, ElevenLabs and Deepgram,
//! validates them before any network call, sends the synthesis request and
//! delivers the returned MP3 to a file, the speakers, or both.

pub mod artifact;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod output;
pub mod playback;
pub mod provider;
pub mod providers;
pub mod request;
pub mod validate;
pub mod voices;

#[cfg(test)]
mod mock;

pub use artifact::{AudioArtifact, AudioFormat};
pub use dispatch::{
    DemoPauses, DemoReport, DemoStage, Dispatcher, Invocation, Mode, Outcome, PreparedCall,
    VoiceFailure, process_env,
};
pub use error::{Result, TtsError};
pub use executor::{HttpSynthesizer, Synthesizer};
pub use output::{Delivery, OutputPlan};
pub use playback::{AudioPlayer, RodioPlayer};
pub use provider::{
    AuthScheme, Provider, ProviderCatalog, ProviderProfile, SpeedPolicy, VoicePolicy, VoicePreset,
};
pub use request::{RequestDescriptor, SynthesisRequest, VoiceTuning};
