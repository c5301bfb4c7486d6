use crate::domain::error::{SpeechRecognitionError, VoiceInputError, VoxError};
use crate::domain::model::{LanguageTag, Utterance};
use crate::domain::traits::{AudioSource, SpeechRecognizer};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct VoiceInputSettings {
    /// How long to sample ambient noise before listening
    pub calibration: Duration,
    /// Upper bound on calibration plus listening
    pub listen_timeout: Duration,
}

impl Default for VoiceInputSettings {
    fn default() -> Self {
        Self {
            calibration: Duration::from_millis(1000),
            listen_timeout: Duration::from_secs(15),
        }
    }
}

/// Holds an opened audio source and releases it when dropped.
struct AudioGuard<'a> {
    source: &'a mut dyn AudioSource,
}

impl<'a> AudioGuard<'a> {
    async fn acquire(source: &'a mut dyn AudioSource) -> Result<AudioGuard<'a>, VoxError> {
        source.open().await?;
        Ok(Self { source })
    }
}

impl<'a> Deref for AudioGuard<'a> {
    type Target = dyn AudioSource + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.source
    }
}

impl<'a> DerefMut for AudioGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.source
    }
}

impl Drop for AudioGuard<'_> {
    fn drop(&mut self) {
        self.source.release();
    }
}

/// Speech to text: capture one utterance and transcribe it.
pub struct VoiceInputAdapter {
    source: Box<dyn AudioSource>,
    recognizer: Arc<dyn SpeechRecognizer>,
    settings: VoiceInputSettings,
}

impl VoiceInputAdapter {
    pub fn new(
        source: Box<dyn AudioSource>,
        recognizer: Arc<dyn SpeechRecognizer>,
        settings: VoiceInputSettings,
    ) -> Self {
        Self {
            source,
            recognizer,
            settings,
        }
    }

    /// Capture an utterance and return its transcription.
    ///
    /// The audio source is released exactly once after it has been opened,
    /// whatever the outcome.
    pub async fn capture_utterance(
        &mut self,
        language: Option<LanguageTag>,
    ) -> Result<String, VoiceInputError> {
        let calibration = self.settings.calibration;
        let limit = self.settings.listen_timeout;

        let mut guard = AudioGuard::acquire(self.source.as_mut())
            .await
            .map_err(|e| VoiceInputError::Device(e.to_string()))?;

        let captured = tokio::time::timeout(limit, async {
            let threshold = guard.adjust_for_ambient_noise(calibration).await?;
            debug!("Ambient energy threshold: {:.1}", threshold);
            let utterance = guard.listen().await?;
            Ok::<(f32, Utterance), VoxError>((threshold, utterance))
        })
        .await;

        let (threshold, utterance) = match captured {
            Ok(Ok(captured)) => captured,
            Ok(Err(e)) => {
                warn!("Audio capture failed: {}", e);
                return Err(VoiceInputError::Device(e.to_string()));
            }
            Err(_) => {
                warn!("Audio capture timed out after {:?}", limit);
                return Err(VoiceInputError::Timeout(limit.as_secs()));
            }
        };

        // 100 ms windows
        let window = (utterance.sample_rate / 10) as usize;
        let peak = utterance.peak_energy(window);
        if peak <= threshold {
            info!(
                "No speech above threshold (peak {:.1} <= {:.1})",
                peak, threshold
            );
            return Err(SpeechRecognitionError::Unrecognized.into());
        }

        let text = self.recognizer.recognize(&utterance, language).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechRecognitionError::Unrecognized.into());
        }

        debug!("Recognized {} chars", text.chars().count());
        Ok(text.to_string())
    }
}
