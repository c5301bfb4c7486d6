use crate::domain::error::VoxError;
use crate::domain::model::{rms_energy, Utterance};
use crate::domain::traits::AudioSource;
use crate::infrastructure::audio::wav::pcm16_le_samples;
use crate::infrastructure::config::SpeechRecognitionConfig;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, warn};

/// Speech must be this much louder than the ambient noise
pub const DYNAMIC_ENERGY_RATIO: f32 = 1.5;
/// Lowest threshold ever used, so a silent room does not count as speech
pub const MIN_ENERGY_THRESHOLD: f32 = 100.0;

pub fn energy_threshold(ambient: &[i16]) -> f32 {
    (rms_energy(ambient) * DYNAMIC_ENERGY_RATIO).max(MIN_ENERGY_THRESHOLD)
}

/// Split a recorder command line and substitute `{rate}`
pub fn recorder_argv(command: &str, sample_rate: u32) -> Vec<String> {
    let rate = sample_rate.to_string();
    command
        .split_whitespace()
        .map(|part| part.replace("{rate}", &rate))
        .collect()
}

/// Microphone backed by a recorder child process writing raw PCM16 to stdout.
///
/// `open` spawns the recorder and `release` kills it.
pub struct CommandMicrophone {
    argv: Vec<String>,
    sample_rate: u32,
    phrase: Duration,
    child: Option<Child>,
    stdout: Option<ChildStdout>,
}

impl CommandMicrophone {
    pub fn new(argv: Vec<String>, sample_rate: u32, phrase: Duration) -> Self {
        Self {
            argv,
            sample_rate,
            phrase,
            child: None,
            stdout: None,
        }
    }

    pub fn from_config(config: &SpeechRecognitionConfig) -> Self {
        Self::new(
            recorder_argv(&config.recorder_command, config.sample_rate),
            config.sample_rate,
            Duration::from_secs(config.phrase_seconds.max(1)),
        )
    }

    fn samples_for(&self, duration: Duration) -> usize {
        (self.sample_rate as u128 * duration.as_millis() / 1000) as usize
    }

    async fn read_samples(&mut self, count: usize) -> Result<Vec<i16>, VoxError> {
        let stdout = self
            .stdout
            .as_mut()
            .ok_or_else(|| VoxError::Config("Microphone is not open".to_string()))?;

        let mut bytes = vec![0u8; count * 2];
        stdout.read_exact(&mut bytes).await?;
        Ok(pcm16_le_samples(&bytes))
    }
}

#[async_trait]
impl AudioSource for CommandMicrophone {
    async fn open(&mut self) -> Result<(), VoxError> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| VoxError::Config("Recorder command is empty".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| VoxError::Config(format!("Cannot start recorder '{}': {}", program, e)))?;

        self.stdout = child.stdout.take();
        self.child = Some(child);
        debug!("Recorder '{}' started", program);
        Ok(())
    }

    async fn adjust_for_ambient_noise(&mut self, duration: Duration) -> Result<f32, VoxError> {
        let ambient = self.read_samples(self.samples_for(duration)).await?;
        Ok(energy_threshold(&ambient))
    }

    async fn listen(&mut self) -> Result<Utterance, VoxError> {
        let samples = self.read_samples(self.samples_for(self.phrase)).await?;
        Ok(Utterance::new(samples, self.sample_rate))
    }

    fn release(&mut self) {
        self.stdout = None;
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                warn!("Failed to stop recorder: {}", e);
            }
            debug!("Recorder released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_rate() {
        assert_eq!(
            recorder_argv("arecord -q -f S16_LE -c 1 -t raw -r {rate}", 22_050),
            vec!["arecord", "-q", "-f", "S16_LE", "-c", "1", "-t", "raw", "-r", "22050"]
        );
    }

    #[test]
    fn threshold_tracks_ambient_noise() {
        assert_eq!(energy_threshold(&[0; 100]), MIN_ENERGY_THRESHOLD);
        assert!((energy_threshold(&[400; 100]) - 600.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn unopened_microphone_cannot_listen() {
        let mut mic = CommandMicrophone::new(vec!["true".to_string()], 16_000, Duration::from_secs(1));
        assert!(mic.listen().await.is_err());
        mic.release();
    }

    #[tokio::test]
    async fn missing_recorder_fails_to_open() {
        let mut mic = CommandMicrophone::new(
            vec!["voxlate-no-such-recorder".to_string()],
            16_000,
            Duration::from_secs(1),
        );
        assert!(matches!(mic.open().await, Err(VoxError::Config(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn reads_silence_from_recorder() {
        // 1 s calibration + 1 s phrase at 8 kHz, 2 bytes per sample
        let argv = recorder_argv("head -c 32000 /dev/zero", 8_000);
        let mut mic = CommandMicrophone::new(argv, 8_000, Duration::from_secs(1));

        mic.open().await.unwrap();
        let threshold = mic
            .adjust_for_ambient_noise(Duration::from_secs(1))
            .await
            .unwrap();
        let utterance = mic.listen().await.unwrap();
        mic.release();

        assert_eq!(threshold, MIN_ENERGY_THRESHOLD);
        assert_eq!(utterance.samples.len(), 8_000);
        assert_eq!(utterance.energy(), 0.0);
    }
}
