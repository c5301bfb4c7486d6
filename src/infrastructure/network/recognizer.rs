use crate::domain::error::{SpeechRecognitionError, VoxError};
use crate::domain::model::{LanguageTag, Utterance};
use crate::domain::traits::SpeechRecognizer;
use crate::infrastructure::audio::wav::encode_wav;
use crate::infrastructure::config::SpeechRecognitionConfig;
use crate::infrastructure::network::http::{create_client, join_url};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize, Debug)]
struct InferenceResponse {
    #[serde(default)]
    text: String,
    error: Option<String>,
}

/// Speech recognizer backed by a whisper-style `/inference` endpoint
pub struct HttpSpeechRecognizer {
    client: Client,
    endpoint: String,
}

impl HttpSpeechRecognizer {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SpeechRecognitionConfig) -> Result<Self, VoxError> {
        if config.endpoint.trim().is_empty() {
            return Err(VoxError::Config(
                "Speech recognition endpoint not configured".to_string(),
            ));
        }
        let client = create_client(config.timeout_secs)?;
        Ok(Self::new(client, config.endpoint.clone()))
    }
}

fn unavailable(e: impl ToString) -> SpeechRecognitionError {
    SpeechRecognitionError::ServiceUnavailable(e.to_string())
}

#[async_trait]
impl SpeechRecognizer for HttpSpeechRecognizer {
    async fn recognize(
        &self,
        utterance: &Utterance,
        language: Option<LanguageTag>,
    ) -> Result<String, SpeechRecognitionError> {
        let wav = encode_wav(utterance).map_err(|e| {
            warn!("Could not encode utterance: {}", e);
            SpeechRecognitionError::Unrecognized
        })?;

        let audio = Part::bytes(wav)
            .file_name("utterance.wav")
            .mime_str("audio/wav")
            .map_err(unavailable)?;
        let mut form = Form::new()
            .part("file", audio)
            .text("response_format", "json")
            .text("temperature", "0.0");
        if let Some(language) = language {
            form = form.text("language", language.iso_code());
        }

        debug!(
            "Sending {:.1}s utterance to {}",
            utterance.duration_secs(),
            self.endpoint
        );

        let response = self
            .client
            .post(join_url(&self.endpoint, "inference"))
            .multipart(form)
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("recognizer returned {}", status)));
        }

        let reply = response
            .json::<InferenceResponse>()
            .await
            .map_err(unavailable)?;

        if let Some(error) = reply.error {
            return Err(unavailable(error));
        }

        let text = reply.text.trim();
        if text.is_empty() {
            return Err(SpeechRecognitionError::Unrecognized);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_without_text_defaults_to_empty() {
        let reply: InferenceResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.text.is_empty());
        assert!(reply.error.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_unavailable() {
        // port 9 (discard) is closed on test machines
        let client = create_client(2).unwrap();
        let recognizer = HttpSpeechRecognizer::new(client, "http://127.0.0.1:9");
        let utterance = Utterance::new(vec![500; 160], 16_000);

        let result = recognizer.recognize(&utterance, None).await;

        assert!(matches!(
            result,
            Err(SpeechRecognitionError::ServiceUnavailable(_))
        ));
    }
}
