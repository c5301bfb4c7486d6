//! End-to-end translation handler tests against a stubbed backend

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use voxlate::application::translate::TranslationRequestHandler;
use voxlate::domain::error::{TranslateError, ValidationError, VoxError};
use voxlate::domain::model::{LanguageTag, TranslationRequest};
use voxlate::domain::traits::TranslationService;

struct Dictionary {
    calls: AtomicUsize,
}

#[async_trait]
impl TranslationService for Dictionary {
    async fn generate(
        &self,
        text: &str,
        _source: LanguageTag,
        target: LanguageTag,
    ) -> Result<String, VoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match (text, target) {
            ("Hello", LanguageTag::French) => Ok("Bonjour".to_string()),
            ("Hello", LanguageTag::German) => Ok("Hallo".to_string()),
            _ => Err(VoxError::Api("unsupported phrase".to_string())),
        }
    }
}

fn setup() -> (Arc<Dictionary>, TranslationRequestHandler) {
    let service = Arc::new(Dictionary {
        calls: AtomicUsize::new(0),
    });
    let handler = TranslationRequestHandler::new(service.clone());
    (service, handler)
}

#[tokio::test]
async fn test_successful_translation() {
    let (_, handler) = setup();
    let request = TranslationRequest::new(
        "Hello",
        Some(LanguageTag::English),
        Some(LanguageTag::German),
    );
    assert_eq!(handler.translate(&request).await, Ok("Hallo".to_string()));
}

#[tokio::test]
async fn test_unselected_languages() {
    let (service, handler) = setup();

    let request = TranslationRequest::new("Hello", None, Some(LanguageTag::French));
    assert_eq!(
        handler.translate(&request).await,
        Err(TranslateError::Validation(ValidationError::NoSourceLanguage))
    );

    let request = TranslationRequest::new("Hello", Some(LanguageTag::French), None);
    assert_eq!(
        handler.translate(&request).await,
        Err(TranslateError::Validation(ValidationError::NoTargetLanguage))
    );

    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_backend_error_message() {
    let (service, handler) = setup();
    let request = TranslationRequest::new(
        "Goodbye",
        Some(LanguageTag::English),
        Some(LanguageTag::Hindi),
    );

    let error = handler.translate(&request).await.unwrap_err();

    assert!(error.to_string().starts_with("An error occurred during translation:"));
    assert!(error.to_string().contains("unsupported phrase"));
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_validation_messages() {
    assert_eq!(
        ValidationError::EmptyText.to_string(),
        "Please enter a valid text to translate."
    );
    assert_eq!(
        ValidationError::SameLanguage.to_string(),
        "Source and target languages must be different."
    );
}
