use crate::domain::error::VoxError;
use crate::domain::model::LanguageTag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub enable_emoji: bool,
    #[serde(default = "default_true")]
    pub speak_result: bool,
    pub default_source: Option<LanguageTag>,
    pub default_target: Option<LanguageTag>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub speech_recognition: SpeechRecognitionConfig,
    #[serde(default)]
    pub speech_output: SpeechOutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Self-hosted mBART-50 server speaking `{text, src_lang, tgt_lang}`
    #[default]
    Mbart,
    LibreTranslate,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechRecognitionConfig {
    #[serde(default = "default_recognition_endpoint")]
    pub endpoint: String,
    /// Command streaming raw mono PCM16 to stdout; `{rate}` is replaced
    /// by `sample_rate`
    #[serde(default = "default_recorder_command")]
    pub recorder_command: String,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_calibration_ms")]
    pub calibration_ms: u64,
    #[serde(default = "default_phrase_seconds")]
    pub phrase_seconds: u64,
    #[serde(default = "default_listen_timeout")]
    pub listen_timeout_secs: u64,
    #[serde(default = "default_recognition_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechOutputConfig {
    #[serde(default = "default_speech_command")]
    pub command: String,
    /// Flag placed before the ISO language code, e.g. `-v` for espeak-ng.
    /// Empty means the command's default voice.
    #[serde(default = "default_voice_flag")]
    pub voice_flag: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            endpoint: default_translation_endpoint(),
            api_key: None,
            timeout_secs: default_translation_timeout(),
        }
    }
}

impl Default for SpeechRecognitionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognition_endpoint(),
            recorder_command: default_recorder_command(),
            sample_rate: default_sample_rate(),
            calibration_ms: default_calibration_ms(),
            phrase_seconds: default_phrase_seconds(),
            listen_timeout_secs: default_listen_timeout(),
            timeout_secs: default_recognition_timeout(),
        }
    }
}

impl Default for SpeechOutputConfig {
    fn default() -> Self {
        Self {
            command: default_speech_command(),
            voice_flag: default_voice_flag(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
            speak_result: true,
            default_source: None,
            default_target: None,
            logging: Logging::default(),
            translation: TranslationConfig::default(),
            speech_recognition: SpeechRecognitionConfig::default(),
            speech_output: SpeechOutputConfig::default(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "temp".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_translation_endpoint() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_translation_timeout() -> u64 {
    60
}
fn default_recognition_endpoint() -> String {
    "http://127.0.0.1:8080".to_string()
}
fn default_recorder_command() -> String {
    if cfg!(target_os = "linux") {
        "arecord -q -f S16_LE -c 1 -t raw -r {rate}".to_string()
    } else {
        // sox
        "rec -q -t raw -b 16 -e signed-integer -c 1 -r {rate} -".to_string()
    }
}
fn default_sample_rate() -> u32 {
    16_000
}
fn default_calibration_ms() -> u64 {
    1000
}
fn default_phrase_seconds() -> u64 {
    5
}
fn default_listen_timeout() -> u64 {
    15
}
fn default_recognition_timeout() -> u64 {
    30
}
fn default_speech_command() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak-ng".to_string()
    }
}
fn default_voice_flag() -> String {
    if cfg!(target_os = "macos") {
        String::new()
    } else {
        "-v".to_string()
    }
}

/// Map a configured level name to an `EnvFilter` directive
pub fn log_directive(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("voxlate").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, VoxError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn load_config() -> Result<Config, VoxError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn sample_config() -> Result<String, VoxError> {
    toml::to_string_pretty(&Config::default())
        .map_err(|e| VoxError::Config(format!("Failed to serialize config: {}", e)))
}

pub fn generate_config_sample() -> Result<(), VoxError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content = sample_config()?;
        fs::write(&path, toml_content)
            .map_err(|e| VoxError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(VoxError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
