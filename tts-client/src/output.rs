//! Deciding where synthesized audio goes

use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::artifact::AudioArtifact;
use crate::error::{Result, TtsError};
use crate::playback::AudioPlayer;

/// Requested sinks for a synthesized artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPlan {
    /// Save the audio here
    pub path: Option<PathBuf>,
    /// Play even though a path was given
    pub speak: bool,
}

impl OutputPlan {
    pub fn should_write(&self) -> bool {
        self.path.is_some()
    }

    /// Play when nothing is saved, or when explicitly asked to
    pub fn should_play(&self) -> bool {
        self.path.is_none() || self.speak
    }
}

/// What actually happened to an artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    pub saved_to: Option<PathBuf>,
    pub played: bool,
}

/// Write and/or play `audio` according to `plan`. Writing happens first.
pub fn deliver(
    audio: &AudioArtifact,
    plan: &OutputPlan,
    player: &dyn AudioPlayer,
) -> Result<Delivery> {
    let mut delivery = Delivery::default();

    if let Some(path) = &plan.path {
        fs::write(path, audio.bytes()).map_err(|source| TtsError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", audio.bytes().len(), path.display());
        delivery.saved_to = Some(path.clone());
    }

    if plan.should_play() {
        player.play(audio)?;
        delivery.played = true;
    }

    Ok(delivery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingPlayer;
    use tempfile::TempDir;

    fn audio() -> AudioArtifact {
        AudioArtifact::mp3(b"ID3 mp3 frames".to_vec())
    }

    #[test]
    fn test_no_output_only_plays() {
        let player = RecordingPlayer::new();
        let plan = OutputPlan::default();

        let delivery = deliver(&audio(), &plan, &player).unwrap();

        assert!(!plan.should_write());
        assert_eq!(delivery, Delivery { saved_to: None, played: true });
        assert_eq!(player.play_count(), 1);
    }

    #[test]
    fn test_output_without_speak_only_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mp3");
        let player = RecordingPlayer::new();
        let plan = OutputPlan {
            path: Some(path.clone()),
            speak: false,
        };

        let delivery = deliver(&audio(), &plan, &player).unwrap();

        assert_eq!(delivery.saved_to.as_deref(), Some(path.as_path()));
        assert!(!delivery.played);
        assert_eq!(player.play_count(), 0);
        assert_eq!(fs::read(&path).unwrap(), b"ID3 mp3 frames");
    }

    #[test]
    fn test_output_with_speak_does_both() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("both.mp3");
        let player = RecordingPlayer::new();
        let plan = OutputPlan {
            path: Some(path.clone()),
            speak: true,
        };

        let delivery = deliver(&audio(), &plan, &player).unwrap();

        assert!(delivery.played);
        assert!(path.exists());
        assert_eq!(player.play_count(), 1);
    }

    #[test]
    fn test_speak_without_output_still_plays_once() {
        let player = RecordingPlayer::new();
        let plan = OutputPlan {
            path: None,
            speak: true,
        };
        deliver(&audio(), &plan, &player).unwrap();
        assert_eq!(player.play_count(), 1);
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out.mp3");
        let player = RecordingPlayer::new();
        let plan = OutputPlan {
            path: Some(path),
            speak: true,
        };

        let err = deliver(&audio(), &plan, &player).unwrap_err();

        assert!(matches!(err, TtsError::OutputWrite { .. }));
        assert!(err.to_string().contains("missing-dir"));
        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_playback_failure_propagates() {
        let player = RecordingPlayer::failing();
        let err = deliver(&audio(), &OutputPlan::default(), &player).unwrap_err();
        assert!(matches!(err, TtsError::Playback(_)));
    }
}
