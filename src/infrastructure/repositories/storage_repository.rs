use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StorageRepositoryError {
    #[error("failed to read local audio file: {0}")]
    LocalFile(#[from] std::io::Error),
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("failed to set object ACL: {0}")]
    Acl(String),
}

/// Repository for publishing synthesized audio.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Upload the file at `path` under object key `key`, make it publicly
    /// readable and return its public URL.
    async fn upload(&self, path: &Path, key: &str) -> Result<String, StorageRepositoryError>;
}
