//! Built-in TTS providers
//!
//! Each module owns its provider's profile (endpoint, auth, voices, speed
//! policy) and the mapping from a [`SynthesisRequest`](crate::request::SynthesisRequest)
//! to that provider's request shape.

pub mod deepgram;
pub mod elevenlabs;
pub mod openai;
