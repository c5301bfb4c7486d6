use crate::domain::error::{TranslateError, ValidationError};
use crate::domain::model::{LanguageTag, TranslationOutcome, TranslationRequest};
use crate::domain::traits::TranslationService;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

pub type TranslationResult = Result<String, TranslateError>;

/// Validates a translation request and hands it to the backend.
#[derive(Clone)]
pub struct TranslationRequestHandler {
    service: Arc<dyn TranslationService>,
}

impl TranslationRequestHandler {
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self { service }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        self.translate_outcome(request)
            .await
            .map(|outcome| outcome.translation)
    }

    /// Same as `translate`, keeping the validated languages with the result
    pub async fn translate_outcome(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationOutcome, TranslateError> {
        let (source, target) = validate(request)?;

        debug!(
            "Translating {} chars {} -> {}",
            request.text.chars().count(),
            source.code(),
            target.code()
        );

        match self.service.generate(&request.text, source, target).await {
            Ok(translation) => Ok(TranslationOutcome {
                text: request.text.clone(),
                source,
                target,
                translation,
                translated_at: Utc::now(),
            }),
            Err(e) => {
                warn!("Translation backend failed: {}", e);
                Err(TranslateError::Backend(e.to_string()))
            }
        }
    }
}

/// First failing check wins.
pub fn validate(
    request: &TranslationRequest,
) -> Result<(LanguageTag, LanguageTag), ValidationError> {
    if request.text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let source = request.source.ok_or(ValidationError::NoSourceLanguage)?;
    let target = request.target.ok_or(ValidationError::NoTargetLanguage)?;
    if source == target {
        return Err(ValidationError::SameLanguage);
    }
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::VoxError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubService {
        reply: Option<String>,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, LanguageTag, LanguageTag)>>,
    }

    impl StubService {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl TranslationService for StubService {
        async fn generate(
            &self,
            text: &str,
            source: LanguageTag,
            target: LanguageTag,
        ) -> Result<String, VoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((text.to_string(), source, target));
            self.reply
                .clone()
                .ok_or_else(|| VoxError::Api("model exploded".to_string()))
        }
    }

    fn handler(stub: &Arc<StubService>) -> TranslationRequestHandler {
        TranslationRequestHandler::new(stub.clone())
    }

    #[tokio::test]
    async fn translates_hello_to_french() {
        let stub = Arc::new(StubService::replying("Bonjour"));
        let request = TranslationRequest::new(
            "Hello",
            Some(LanguageTag::English),
            Some(LanguageTag::French),
        );

        let result = handler(&stub).translate(&request).await;

        assert_eq!(result, Ok("Bonjour".to_string()));
        let seen = stub.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(
                "Hello".to_string(),
                LanguageTag::English,
                LanguageTag::French
            )]
        );
    }

    #[tokio::test]
    async fn blank_text_never_reaches_backend() {
        let stub = Arc::new(StubService::replying("unused"));
        for text in ["", "   ", "\n\t "] {
            let request =
                TranslationRequest::new(text, Some(LanguageTag::English), Some(LanguageTag::Hindi));
            let result = handler(&stub).translate(&request).await;
            assert_eq!(
                result,
                Err(TranslateError::Validation(ValidationError::EmptyText))
            );
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn same_language_is_rejected() {
        let stub = Arc::new(StubService::replying("unused"));
        for tag in LanguageTag::ALL {
            let request = TranslationRequest::new("text", Some(tag), Some(tag));
            let result = handler(&stub).translate(&request).await;
            assert_eq!(
                result,
                Err(TranslateError::Validation(ValidationError::SameLanguage))
            );
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn validation_order() {
        let blank_and_unselected = TranslationRequest::new(" ", None, None);
        assert_eq!(
            validate(&blank_and_unselected),
            Err(ValidationError::EmptyText)
        );

        let no_source = TranslationRequest::new("hi", None, None);
        assert_eq!(validate(&no_source), Err(ValidationError::NoSourceLanguage));

        let no_target = TranslationRequest::new("hi", Some(LanguageTag::German), None);
        assert_eq!(validate(&no_target), Err(ValidationError::NoTargetLanguage));

        let ok = TranslationRequest::new(
            "hi",
            Some(LanguageTag::German),
            Some(LanguageTag::Spanish),
        );
        assert_eq!(
            validate(&ok),
            Ok((LanguageTag::German, LanguageTag::Spanish))
        );
    }

    #[tokio::test]
    async fn outcome_keeps_validated_languages() {
        let stub = Arc::new(StubService::replying("नमस्ते"));
        let request = TranslationRequest::new(
            "Hello",
            Some(LanguageTag::English),
            Some(LanguageTag::Hindi),
        );

        let outcome = handler(&stub).translate_outcome(&request).await.unwrap();

        assert_eq!(outcome.text, "Hello");
        assert_eq!(outcome.source, LanguageTag::English);
        assert_eq!(outcome.target, LanguageTag::Hindi);
        assert_eq!(outcome.translation, "नमस्ते");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backend_failure_is_reported_with_cause() {
        let stub = Arc::new(StubService::failing());
        let request = TranslationRequest::new(
            "Hello",
            Some(LanguageTag::English),
            Some(LanguageTag::French),
        );

        let result = handler(&stub).translate(&request).await;

        match result {
            Err(TranslateError::Backend(message)) => assert!(message.contains("model exploded")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
