use crate::infrastructure::repositories::{SpeechRepositoryError, StorageRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SpeechRepositoryError),
    #[error("synthesis billed no characters")]
    NothingBilled,
    #[error("failed to write temporary audio file: {0}")]
    TempFile(#[from] std::io::Error),
    #[error("storage failed: {0}")]
    Storage(#[from] StorageRepositoryError),
}
