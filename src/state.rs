use crate::application::translate::TranslationRequestHandler;
use crate::application::voice_input::{VoiceInputAdapter, VoiceInputSettings};
use crate::application::voice_output::VoiceOutputAdapter;
use crate::domain::error::VoxError;
use crate::domain::traits::{AudioSource, SpeechEngineFactory, SpeechRecognizer, TranslationService};
use crate::infrastructure::audio::microphone::CommandMicrophone;
use crate::infrastructure::audio::speaker::CommandSpeechFactory;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::HttpTranslationService;
use crate::infrastructure::network::recognizer::HttpSpeechRecognizer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Backends built once at startup and shared by every action
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: TranslationRequestHandler,
    pub voice_input: Arc<Mutex<VoiceInputAdapter>>,
    pub voice_output: VoiceOutputAdapter,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, VoxError> {
        let service = HttpTranslationService::from_config(&config.translation)?;
        let recognizer = HttpSpeechRecognizer::from_config(&config.speech_recognition)?;
        let microphone = CommandMicrophone::from_config(&config.speech_recognition);
        let speech = CommandSpeechFactory::new(config.speech_output.clone());

        Ok(Self::with_services(
            config,
            Arc::new(service),
            Box::new(microphone),
            Arc::new(recognizer),
            Arc::new(speech),
        ))
    }

    pub fn with_services(
        config: Config,
        service: Arc<dyn TranslationService>,
        source: Box<dyn AudioSource>,
        recognizer: Arc<dyn SpeechRecognizer>,
        speech: Arc<dyn SpeechEngineFactory>,
    ) -> Self {
        let recognition = &config.speech_recognition;
        let calibration = Duration::from_millis(recognition.calibration_ms);
        // never shorter than calibration plus one phrase window
        let floor = calibration + Duration::from_secs(recognition.phrase_seconds + 1);
        let settings = VoiceInputSettings {
            calibration,
            listen_timeout: Duration::from_secs(recognition.listen_timeout_secs).max(floor),
        };

        Self {
            translator: TranslationRequestHandler::new(service),
            voice_input: Arc::new(Mutex::new(VoiceInputAdapter::new(
                source, recognizer, settings,
            ))),
            voice_output: VoiceOutputAdapter::new(speech),
            config: Arc::new(config),
        }
    }
}
