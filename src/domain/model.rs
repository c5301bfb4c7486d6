use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown for an unselected language control.
pub const SELECT_LANGUAGE: &str = "Select Language";

/// Languages known to the translation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageTag {
    #[serde(rename = "en_XX")]
    English,
    #[serde(rename = "hi_IN")]
    Hindi,
    #[serde(rename = "mr_IN")]
    Marathi,
    #[serde(rename = "fr_XX")]
    French,
    #[serde(rename = "es_XX")]
    Spanish,
    #[serde(rename = "de_DE")]
    German,
}

impl LanguageTag {
    pub const ALL: [LanguageTag; 6] = [
        LanguageTag::English,
        LanguageTag::Hindi,
        LanguageTag::Marathi,
        LanguageTag::French,
        LanguageTag::Spanish,
        LanguageTag::German,
    ];

    /// Backend code, e.g. `en_XX`
    pub fn code(self) -> &'static str {
        match self {
            LanguageTag::English => "en_XX",
            LanguageTag::Hindi => "hi_IN",
            LanguageTag::Marathi => "mr_IN",
            LanguageTag::French => "fr_XX",
            LanguageTag::Spanish => "es_XX",
            LanguageTag::German => "de_DE",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LanguageTag::English => "English",
            LanguageTag::Hindi => "Hindi",
            LanguageTag::Marathi => "Marathi",
            LanguageTag::French => "French",
            LanguageTag::Spanish => "Spanish",
            LanguageTag::German => "German",
        }
    }

    /// ISO-639-1 code used by recognizers, voices and ISO-based backends
    pub fn iso_code(self) -> &'static str {
        match self {
            LanguageTag::English => "en",
            LanguageTag::Hindi => "hi",
            LanguageTag::Marathi => "mr",
            LanguageTag::French => "fr",
            LanguageTag::Spanish => "es",
            LanguageTag::German => "de",
        }
    }

    /// Parse a language control value. The placeholder maps to `None`.
    pub fn parse_selection(input: &str) -> Result<Option<LanguageTag>, UnknownLanguage> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case(SELECT_LANGUAGE) {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for LanguageTag {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LanguageTag::ALL
            .into_iter()
            .find(|tag| {
                needle.eq_ignore_ascii_case(tag.code())
                    || needle.eq_ignore_ascii_case(tag.iso_code())
                    || needle.eq_ignore_ascii_case(tag.name())
            })
            .ok_or_else(|| UnknownLanguage(needle.to_string()))
    }
}

/// Display text for a language control value
pub fn selection_label(selection: Option<LanguageTag>) -> &'static str {
    selection.map(LanguageTag::name).unwrap_or(SELECT_LANGUAGE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Option<LanguageTag>,
    pub target: Option<LanguageTag>,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: Option<LanguageTag>,
        target: Option<LanguageTag>,
    ) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }
}

/// A successful translation, as printed by `--json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub text: String,
    pub source: LanguageTag,
    pub target: LanguageTag,
    pub translation: String,
    pub translated_at: DateTime<Utc>,
}

/// Mono 16-bit PCM audio captured from the microphone
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl Utterance {
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// RMS energy over the whole utterance
    pub fn energy(&self) -> f32 {
        rms_energy(&self.samples)
    }

    /// Highest RMS energy of any window of `window` samples
    pub fn peak_energy(&self, window: usize) -> f32 {
        if window == 0 || self.samples.is_empty() {
            return self.energy();
        }
        self.samples
            .chunks(window)
            .map(rms_energy)
            .fold(0.0, f32::max)
    }
}

pub fn rms_energy(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}
