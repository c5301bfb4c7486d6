use crate::domain::error::{SpeechRecognitionError, VoiceOutputError, VoxError};
use crate::domain::model::{LanguageTag, Utterance};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for translation backends
///
/// The backend is built once at startup and handed to the request handler,
/// so tests can swap in a stub.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translate `text` from `source` into `target`
    async fn generate(
        &self,
        text: &str,
        source: LanguageTag,
        target: LanguageTag,
    ) -> Result<String, VoxError>;
}

/// Trait for microphone-like audio sources
///
/// `open` acquires the device and `release` gives it back. `release` is
/// synchronous so it can run from a drop guard on every exit path.
#[async_trait]
pub trait AudioSource: Send {
    async fn open(&mut self) -> Result<(), VoxError>;

    /// Sample the ambient noise for `duration` and return an energy threshold
    async fn adjust_for_ambient_noise(&mut self, duration: Duration) -> Result<f32, VoxError>;

    /// Record one phrase window
    async fn listen(&mut self) -> Result<Utterance, VoxError>;

    fn release(&mut self);
}

/// Trait for speech-to-text backends
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        utterance: &Utterance,
        language: Option<LanguageTag>,
    ) -> Result<String, SpeechRecognitionError>;
}

/// A text-to-speech engine instance
///
/// Utterances are queued with `say` and played by `run_and_wait`.
/// Dropping the engine releases it.
#[async_trait]
pub trait SpeechEngine: Send {
    fn say(&mut self, text: &str, language: Option<LanguageTag>);

    async fn run_and_wait(&mut self) -> Result<(), VoiceOutputError>;
}

pub trait SpeechEngineFactory: Send + Sync {
    fn init(&self) -> Result<Box<dyn SpeechEngine>, VoiceOutputError>;
}
