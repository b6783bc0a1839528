//! Audio playback through the default output device

use log::debug;
use rodio::{Decoder, OutputStreamBuilder, Sink, Source};
use std::io::Cursor;
use std::thread;
use std::time::Duration;

use crate::artifact::AudioArtifact;
use crate::error::{Result, TtsError};

/// How often the sink is checked for the end of playback
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Plays an artifact to completion
pub trait AudioPlayer: Send + Sync {
    fn play(&self, audio: &AudioArtifact) -> Result<()>;
}

/// Player using rodio's default output stream
pub struct RodioPlayer {
    poll_interval: Duration,
}

impl RodioPlayer {
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&self, audio: &AudioArtifact) -> Result<()> {
        let source = Decoder::new(Cursor::new(audio.bytes().to_vec())).map_err(|e| {
            TtsError::Playback(format!("failed to decode {}: {}", audio.format(), e))
        })?;

        debug!(
            "Decoded {} audio: {} Hz, {} channel(s)",
            audio.format(),
            source.sample_rate(),
            source.channels()
        );

        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| TtsError::Playback(format!("failed to open audio output: {}", e)))?;
        stream.log_on_drop(false);

        let sink = Sink::connect_new(stream.mixer());
        sink.append(source);

        // Blocks the calling thread until the device has drained the queue.
        // Callers run one synthesis at a time on a current-thread runtime, where
        // `block_in_place` is not available and nothing else is waiting to run.
        while !sink.empty() {
            thread::sleep(self.poll_interval);
        }

        Ok(())
    }
}
