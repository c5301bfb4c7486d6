use crate::domain::error::VoxError;
use crate::domain::model::LanguageTag;
use crate::domain::traits::TranslationService;
use crate::infrastructure::config::{Provider, TranslationConfig};
use crate::infrastructure::network::http::{create_client, join_url};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

// mBART server wire format
#[derive(Serialize, Debug)]
struct MbartRequest<'a> {
    text: &'a str,
    src_lang: &'a str,
    tgt_lang: &'a str,
}

#[derive(Deserialize, Debug)]
struct MbartResponse {
    translation: Option<String>,
    error: Option<String>,
}

// LibreTranslate wire format
#[derive(Serialize, Debug)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

/// Translation backend reached over HTTP
pub struct HttpTranslationService {
    client: Client,
    config: TranslationConfig,
}

impl HttpTranslationService {
    pub fn new(client: Client, config: TranslationConfig) -> Self {
        Self { client, config }
    }

    pub fn from_config(config: &TranslationConfig) -> Result<Self, VoxError> {
        if config.endpoint.trim().is_empty() {
            return Err(VoxError::Config(
                "Translation endpoint not configured".to_string(),
            ));
        }
        let client = create_client(config.timeout_secs)?;
        Ok(Self::new(client, config.clone()))
    }

    async fn translate_mbart(
        &self,
        text: &str,
        source: LanguageTag,
        target: LanguageTag,
    ) -> Result<String, VoxError> {
        let body = MbartRequest {
            text,
            src_lang: source.code(),
            tgt_lang: target.code(),
        };

        let response = self
            .client
            .post(join_url(&self.config.endpoint, "translate"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: MbartResponse = decode_reply(status, &body, "mBART server")?;

        if let Some(error) = reply.error {
            return Err(VoxError::Api(format!("mBART server {}: {}", status, error)));
        }
        if !status.is_success() {
            return Err(VoxError::Api(format!("mBART server returned {}", status)));
        }
        reply
            .translation
            .ok_or_else(|| VoxError::Api("mBART server sent no translation".to_string()))
    }

    async fn translate_libre(
        &self,
        text: &str,
        source: LanguageTag,
        target: LanguageTag,
    ) -> Result<String, VoxError> {
        let body = LibreRequest {
            q: text,
            source: source.iso_code(),
            target: target.iso_code(),
            format: "text",
            api_key: self.config.api_key.as_deref().filter(|k| !k.is_empty()),
        };

        let response = self
            .client
            .post(join_url(&self.config.endpoint, "translate"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: LibreResponse = decode_reply(status, &body, "LibreTranslate")?;

        if let Some(error) = reply.error {
            return Err(VoxError::Api(format!(
                "LibreTranslate {}: {}",
                status, error
            )));
        }
        if !status.is_success() {
            return Err(VoxError::Api(format!("LibreTranslate returned {}", status)));
        }
        reply
            .translated_text
            .ok_or_else(|| VoxError::Api("LibreTranslate sent no translation".to_string()))
    }
}

/// Error pages from a proxy are not JSON; report their status instead
fn decode_reply<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    backend: &str,
) -> Result<T, VoxError> {
    match serde_json::from_str(body) {
        Ok(reply) => Ok(reply),
        Err(_) if !status.is_success() => {
            Err(VoxError::Api(format!("{} returned {}", backend, status)))
        }
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl TranslationService for HttpTranslationService {
    async fn generate(
        &self,
        text: &str,
        source: LanguageTag,
        target: LanguageTag,
    ) -> Result<String, VoxError> {
        debug!(
            "POST {} via {:?}",
            self.config.endpoint, self.config.provider
        );
        match self.config.provider {
            Provider::Mbart => self.translate_mbart(text, source, target).await,
            Provider::LibreTranslate => self.translate_libre(text, source, target).await,
        }
    }
}
