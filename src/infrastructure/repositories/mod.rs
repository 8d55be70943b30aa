pub mod polly_speech_repository;
pub mod s3_storage_repository;
pub mod speech_repository;
pub mod storage_repository;

pub use polly_speech_repository::PollySpeechRepository;
pub use s3_storage_repository::{public_object_url, S3AudioStorageRepository};
pub use speech_repository::{SpeechInput, SpeechRepository, SpeechRepositoryError, SynthesizedSpeech};
pub use storage_repository::{AudioStorageRepository, StorageRepositoryError};
