use std::fmt;

/// Audio container returned by providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Mp3 => f.write_str("MP3"),
        }
    }
}

/// Encoded audio produced by one synthesis call
#[derive(Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioArtifact {
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    pub fn mp3(data: Vec<u8>) -> Self {
        Self::new(data, AudioFormat::Mp3)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }
}

impl fmt::Debug for AudioArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioArtifact")
            .field("format", &self.format)
            .field("len", &self.data.len())
            .finish()
    }
}
