use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),
}

/// Input problems detected before the translation backend is called.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid text to translate.")]
    EmptyText,

    #[error("Please select a source language.")]
    NoSourceLanguage,

    #[error("Please select a target language.")]
    NoTargetLanguage,

    #[error("Source and target languages must be different.")]
    SameLanguage,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("An error occurred during translation: {0}")]
    Backend(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechRecognitionError {
    /// Audio was captured but could not be transcribed.
    #[error("Sorry, I couldn't understand your speech.")]
    Unrecognized,

    #[error("Could not request results. Please check your internet connection.")]
    ServiceUnavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceInputError {
    #[error("{0}")]
    Recognition(#[from] SpeechRecognitionError),

    #[error("Microphone error: {0}")]
    Device(String),

    #[error("No speech captured within {0} seconds.")]
    Timeout(u64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceOutputError {
    #[error("Speech engine unavailable: {0}")]
    Engine(String),

    #[error("Speech playback failed: {0}")]
    Playback(String),
}
