use crate::domain::error::{TranslateError, VoiceInputError, VoiceOutputError};
use crate::domain::model::{LanguageTag, TranslationOutcome, TranslationRequest};
use crate::state::AppState;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request-scoped state behind one interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub source: Option<LanguageTag>,
    pub target: Option<LanguageTag>,
    pub text: String,
    pub speak: bool,
}

impl Session {
    pub fn new(source: Option<LanguageTag>, target: Option<LanguageTag>, speak: bool) -> Self {
        Self {
            source,
            target,
            text: String::new(),
            speak,
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn request(&self) -> TranslationRequest {
        TranslationRequest::new(self.text.clone(), self.source, self.target)
    }
}

/// Voice-capture trigger. Replaces the text buffer on success and leaves it
/// untouched otherwise.
pub async fn on_voice_capture(
    state: &AppState,
    session: &mut Session,
) -> Result<String, VoiceInputError> {
    let span = info_span!("voice_capture", action = %Uuid::new_v4());
    let hint = session.source;
    let captured = async {
        let mut adapter = state.voice_input.lock().await;
        adapter.capture_utterance(hint).await
    }
    .instrument(span)
    .await?;

    session.text = captured.clone();
    Ok(captured)
}

/// Translate trigger on the current buffer
pub async fn on_translate(
    state: &AppState,
    session: &Session,
) -> Result<TranslationOutcome, TranslateError> {
    let span = info_span!("translate", action = %Uuid::new_v4());
    let request = session.request();

    async {
        let outcome = state.translator.translate_outcome(&request).await?;
        info!(
            "Translated {} -> {}",
            outcome.source.code(),
            outcome.target.code()
        );
        Ok::<_, TranslateError>(outcome)
    }
    .instrument(span)
    .await
}

/// Read a finished translation aloud in the target language
pub async fn speak_translation(
    state: &AppState,
    outcome: &TranslationOutcome,
) -> Result<(), VoiceOutputError> {
    let span = info_span!("speak", action = %Uuid::new_v4());
    state
        .voice_output
        .speak(&outcome.translation, Some(outcome.target))
        .instrument(span)
        .await
}
