use crate::domain::error::VoiceOutputError;
use crate::domain::model::LanguageTag;
use crate::domain::traits::SpeechEngineFactory;
use std::sync::Arc;
use tracing::debug;

/// Text to speech: one engine per call, blocking until playback ends.
#[derive(Clone)]
pub struct VoiceOutputAdapter {
    factory: Arc<dyn SpeechEngineFactory>,
}

impl VoiceOutputAdapter {
    pub fn new(factory: Arc<dyn SpeechEngineFactory>) -> Self {
        Self { factory }
    }

    pub async fn speak(
        &self,
        text: &str,
        language: Option<LanguageTag>,
    ) -> Result<(), VoiceOutputError> {
        let mut engine = self.factory.init()?;
        engine.say(text, language);
        let played = engine.run_and_wait().await;
        drop(engine);
        debug!("Speech engine released");
        played
    }
}
