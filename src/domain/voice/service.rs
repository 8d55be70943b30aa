use super::dto::{VoiceRequest, VoiceResponse};
use super::error::VoiceServiceError;
use super::ssml::{text_to_ssml, Prosody};
use crate::infrastructure::repositories::{
    AudioStorageRepository, SpeechInput, SpeechRepository, SynthesizedSpeech,
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempPath;
use uuid::Uuid;

/// Longest content (in characters) synthesized inline; anything longer is
/// handed to an asynchronous provider task.
pub const MAX_INLINE_CHARACTERS: usize = 3000;

const AUDIO_EXTENSION: &str = "mp3";

/// Audio synthesized to a local temp file, waiting to be uploaded.
///
/// The file is removed when this value is dropped.
#[derive(Debug)]
pub struct SynthesisResult {
    pub filename: String,
    pub request_characters: i32,
    pub path: TempPath,
}

/// Result of one invocation, before it is flattened into the wire response
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOutcome {
    Uploaded { url: String, request_characters: i32 },
    /// Billed by the provider but not retrievable
    UploadFailed { request_characters: i32, reason: String },
    SynthesisFailed { reason: String },
    TaskStarted { task_id: String },
    TaskFailed { reason: String },
}

impl From<VoiceOutcome> for VoiceResponse {
    fn from(outcome: VoiceOutcome) -> Self {
        match outcome {
            VoiceOutcome::Uploaded {
                url,
                request_characters,
            } => VoiceResponse {
                voice_url: url,
                request_characters,
                task_id: String::new(),
            },
            VoiceOutcome::UploadFailed {
                request_characters, ..
            } => VoiceResponse {
                request_characters,
                ..Default::default()
            },
            VoiceOutcome::TaskStarted { task_id } => VoiceResponse {
                task_id,
                ..Default::default()
            },
            VoiceOutcome::SynthesisFailed { .. } | VoiceOutcome::TaskFailed { .. } => {
                VoiceResponse::default()
            }
        }
    }
}

pub struct VoiceService {
    speech_repo: Arc<dyn SpeechRepository>,
    storage_repo: Arc<dyn AudioStorageRepository>,
    audio_bucket: String,
    temp_dir: PathBuf,
}

impl VoiceService {
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        storage_repo: Arc<dyn AudioStorageRepository>,
        audio_bucket: String,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            speech_repo,
            storage_repo,
            audio_bucket,
            temp_dir,
        }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Turn the request content into audio.
    ///
    /// Short content is synthesized inline and published to the audio
    /// bucket; long content is submitted as a provider task. Provider
    /// failures are reported in the outcome, never as an error.
    async fn create_voice(&self, request: VoiceRequest) -> VoiceOutcome;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn create_voice(&self, request: VoiceRequest) -> VoiceOutcome {
        let content_length = request.content.chars().count();

        tracing::info!(
            content_length,
            content_type = %request.content_type,
            language_code = %request.lang_code,
            voice_id = %request.voice_id,
            engine = %request.engine,
            "Voice synthesis request"
        );

        let input = Self::speech_input(&request);

        if content_length > MAX_INLINE_CHARACTERS {
            return match self.synthesize_task(&input).await {
                Ok(task_id) => VoiceOutcome::TaskStarted { task_id },
                Err(e) => {
                    tracing::error!(error = %e, "Speech synthesis task submission failed");
                    VoiceOutcome::TaskFailed {
                        reason: e.to_string(),
                    }
                }
            };
        }

        let filename = format!("{}.{}", Uuid::new_v4(), AUDIO_EXTENSION);

        let speech = match self.synthesize(&input).await {
            Ok(speech) => speech,
            Err(e) => {
                tracing::error!(error = %e, "Speech synthesis failed");
                return VoiceOutcome::SynthesisFailed {
                    reason: e.to_string(),
                };
            }
        };

        let request_characters = speech.request_characters;

        // Billed from here on: every later failure keeps the character count
        let synthesis = match self.stage(filename, speech).await {
            Ok(synthesis) => synthesis,
            Err(e) => {
                tracing::error!(error = %e, "Staging synthesized audio failed");
                return VoiceOutcome::UploadFailed {
                    request_characters,
                    reason: e.to_string(),
                };
            }
        };

        match self.upload(&synthesis).await {
            Ok(url) => VoiceOutcome::Uploaded {
                url,
                request_characters,
            },
            Err(e) => {
                tracing::error!(
                    error = %e,
                    filename = %synthesis.filename,
                    "Audio upload failed"
                );
                VoiceOutcome::UploadFailed {
                    request_characters,
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl VoiceService {
    fn speech_input(request: &VoiceRequest) -> SpeechInput {
        let prosody = Prosody {
            pitch: request.pitch,
            rate: request.speaking_rate,
            volume: request.volume_gain_db,
        };

        SpeechInput {
            ssml: text_to_ssml(&request.content, &request.engine, prosody),
            language_code: request.lang_code.clone(),
            voice_id: request.voice_id.clone(),
            engine: request.engine.clone(),
        }
    }

    async fn synthesize(&self, input: &SpeechInput) -> Result<SynthesizedSpeech, VoiceServiceError> {
        let speech = self.speech_repo.synthesize(input).await?;

        if speech.request_characters <= 0 {
            return Err(VoiceServiceError::NothingBilled);
        }

        Ok(speech)
    }

    /// Write the audio to `<temp_dir>/<filename>`
    async fn stage(
        &self,
        filename: String,
        speech: SynthesizedSpeech,
    ) -> Result<SynthesisResult, VoiceServiceError> {
        // Guard first so a partial write is cleaned up too
        let path = TempPath::from_path(self.temp_dir.join(&filename));
        tokio::fs::write(&path, &speech.audio).await?;

        tracing::debug!(
            filename = %filename,
            audio_size_bytes = speech.audio.len(),
            "Audio written to temp file"
        );

        Ok(SynthesisResult {
            filename,
            request_characters: speech.request_characters,
            path,
        })
    }

    async fn upload(&self, synthesis: &SynthesisResult) -> Result<String, VoiceServiceError> {
        let url = self
            .storage_repo
            .upload(&synthesis.path, &synthesis.filename)
            .await?;
        Ok(url)
    }

    async fn synthesize_task(&self, input: &SpeechInput) -> Result<String, VoiceServiceError> {
        let task_id = self
            .speech_repo
            .start_synthesis_task(input, &self.audio_bucket)
            .await?;
        Ok(task_id)
    }
}
