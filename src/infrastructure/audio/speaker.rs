use crate::domain::error::VoiceOutputError;
use crate::domain::model::LanguageTag;
use crate::domain::traits::{SpeechEngine, SpeechEngineFactory};
use crate::infrastructure::config::SpeechOutputConfig;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Speech engine that runs a synthesizer command per queued utterance
pub struct CommandSpeechEngine {
    program: String,
    args: Vec<String>,
    voice_flag: Option<String>,
    queue: Vec<(String, Option<LanguageTag>)>,
}

impl CommandSpeechEngine {
    /// Arguments for one utterance, text last
    pub fn argv_for(&self, text: &str, language: Option<LanguageTag>) -> Vec<String> {
        let mut argv = self.args.clone();
        if let (Some(flag), Some(language)) = (&self.voice_flag, language) {
            argv.push(flag.clone());
            argv.push(language.iso_code().to_string());
        }
        argv.push(text.to_string());
        argv
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeechEngine {
    fn say(&mut self, text: &str, language: Option<LanguageTag>) {
        self.queue.push((text.to_string(), language));
    }

    async fn run_and_wait(&mut self) -> Result<(), VoiceOutputError> {
        for (text, language) in std::mem::take(&mut self.queue) {
            let argv = self.argv_for(&text, language);
            debug!("Speaking {} chars with {}", text.chars().count(), self.program);

            let status = Command::new(&self.program)
                .args(&argv)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .status()
                .await
                .map_err(|e| {
                    VoiceOutputError::Engine(format!("cannot run '{}': {}", self.program, e))
                })?;

            if !status.success() {
                return Err(VoiceOutputError::Playback(format!(
                    "'{}' exited with {}",
                    self.program, status
                )));
            }
        }
        Ok(())
    }
}

pub struct CommandSpeechFactory {
    config: SpeechOutputConfig,
}

impl CommandSpeechFactory {
    pub fn new(config: SpeechOutputConfig) -> Self {
        Self { config }
    }
}

impl SpeechEngineFactory for CommandSpeechFactory {
    fn init(&self) -> Result<Box<dyn SpeechEngine>, VoiceOutputError> {
        let mut parts = self.config.command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| VoiceOutputError::Engine("speech command is empty".to_string()))?;
        let voice_flag = Some(self.config.voice_flag.trim())
            .filter(|flag| !flag.is_empty())
            .map(str::to_string);

        Ok(Box::new(CommandSpeechEngine {
            program,
            args: parts.collect(),
            voice_flag,
            queue: Vec::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(command: &str, voice_flag: &str) -> CommandSpeechEngine {
        let mut parts = command.split_whitespace().map(str::to_string);
        CommandSpeechEngine {
            program: parts.next().unwrap(),
            args: parts.collect(),
            voice_flag: Some(voice_flag.to_string()).filter(|f| !f.is_empty()),
            queue: Vec::new(),
        }
    }

    #[test]
    fn voice_flag_selects_language() {
        let engine = engine("espeak-ng -s 150", "-v");
        assert_eq!(
            engine.argv_for("Bonjour", Some(LanguageTag::French)),
            vec!["-s", "150", "-v", "fr", "Bonjour"]
        );
        assert_eq!(engine.argv_for("Hi", None), vec!["-s", "150", "Hi"]);
    }

    #[test]
    fn empty_flag_uses_default_voice() {
        let engine = engine("say", "");
        assert_eq!(engine.argv_for("Hallo", Some(LanguageTag::German)), vec!["Hallo"]);
    }

    #[test]
    fn empty_command_is_rejected() {
        let factory = CommandSpeechFactory::new(SpeechOutputConfig {
            command: "  ".to_string(),
            voice_flag: String::new(),
        });
        assert!(matches!(factory.init(), Err(VoiceOutputError::Engine(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_command_once_per_utterance() {
        let mut ok = engine("true", "");
        ok.say("one", None);
        assert!(ok.run_and_wait().await.is_ok());
        assert!(ok.queue.is_empty());

        let mut failing = engine("false", "");
        failing.say("two", None);
        assert!(matches!(
            failing.run_and_wait().await,
            Err(VoiceOutputError::Playback(_))
        ));
    }
}
