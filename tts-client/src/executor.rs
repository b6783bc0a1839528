//! Single-attempt HTTP execution of provider requests

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::artifact::AudioArtifact;
use crate::error::{Result, TtsError, with_causes};
use crate::request::RequestDescriptor;

/// Requests that take longer than this fail as transport errors
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends a built request and returns the audio it produced
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn execute(&self, request: &RequestDescriptor) -> Result<AudioArtifact>;
}

/// Synthesizer backed by reqwest. No retries.
pub struct HttpSynthesizer {
    client: Client,
}

impl HttpSynthesizer {
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TtsError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Synthesizer for HttpSynthesizer {
    async fn execute(&self, request: &RequestDescriptor) -> Result<AudioArtifact> {
        debug!("POST {}", request.url);

        let mut builder = self.client.post(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(|e| TtsError::Transport(with_causes(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| {
                TtsError::Transport(format!("failed to read response: {}", with_causes(&e)))
            })?;

        debug!("Received {} bytes of audio", bytes.len());
        Ok(AudioArtifact::mp3(bytes.to_vec()))
    }
}
