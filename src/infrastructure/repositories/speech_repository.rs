use crate::domain::voice::Engine;
use async_trait::async_trait;

/// Everything the provider needs to voice one utterance
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechInput {
    /// SSML document, already wrapped with prosody
    pub ssml: String,
    pub language_code: String,
    pub voice_id: String,
    pub engine: Engine,
}

/// Audio returned by a synchronous synthesis call
#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    /// MP3 encoded audio
    pub audio: Vec<u8>,
    /// Characters billed by the provider for this request
    pub request_characters: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechRepositoryError {
    #[error("speech provider error: {0}")]
    Provider(String),
    #[error("failed to read audio stream: {0}")]
    AudioStream(String),
    #[error("speech provider response is missing {0}")]
    MissingField(&'static str),
}

/// Repository for speech synthesis.
/// Abstracts the underlying provider (AWS Polly) so the orchestration can be
/// exercised with in-memory fakes.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize the input synchronously, returning MP3 audio
    async fn synthesize(&self, input: &SpeechInput) -> Result<SynthesizedSpeech, SpeechRepositoryError>;

    /// Submit a long-running synthesis job that writes its output straight
    /// into `output_bucket`. Returns the provider task id.
    async fn start_synthesis_task(
        &self,
        input: &SpeechInput,
        output_bucket: &str,
    ) -> Result<String, SpeechRepositoryError>;
}
