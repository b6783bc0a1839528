//! Test doubles for the synthesizer and player seams

use async_trait::async_trait;
use std::sync::Mutex;

use crate::artifact::AudioArtifact;
use crate::error::{Result, TtsError};
use crate::executor::Synthesizer;
use crate::playback::AudioPlayer;
use crate::request::RequestDescriptor;

/// Records every request; fails the calls whose zero-based index is listed
pub struct MockSynthesizer {
    requests: Mutex<Vec<RequestDescriptor>>,
    fail_on: Vec<usize>,
}

impl MockSynthesizer {
    pub fn succeeding() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_on: calls.to_vec(),
        }
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn execute(&self, request: &RequestDescriptor) -> Result<AudioArtifact> {
        let mut requests = self.requests.lock().unwrap();
        let index = requests.len();
        requests.push(request.clone());

        if self.fail_on.contains(&index) {
            return Err(TtsError::Api {
                status: 500,
                body: format!("mock failure on call {}", index),
            });
        }
        Ok(AudioArtifact::mp3(format!("audio-{}", index).into_bytes()))
    }
}

/// Counts plays; optionally fails every one of them
pub struct RecordingPlayer {
    played: Mutex<Vec<AudioArtifact>>,
    fail: bool,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self {
            played: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn play_count(&self) -> usize {
        self.played.lock().unwrap().len()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, audio: &AudioArtifact) -> Result<()> {
        self.played.lock().unwrap().push(audio.clone());
        if self.fail {
            return Err(TtsError::Playback("no output device".to_string()));
        }
        Ok(())
    }
}
