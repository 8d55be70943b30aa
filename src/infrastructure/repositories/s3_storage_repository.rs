use super::storage_repository::{AudioStorageRepository, StorageRepositoryError};
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl, Client as S3Client};
use std::path::Path;
use std::sync::Arc;

const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Public URL of an object, path-style.
///
/// Without a region the legacy global endpoint is used.
pub fn public_object_url(bucket: &str, region: Option<&str>, key: &str) -> String {
    match region {
        Some(region) => format!("https://s3-{}.amazonaws.com/{}/{}", region, bucket, key),
        None => format!("https://s3.amazonaws.com/{}/{}", bucket, key),
    }
}

/// AWS S3 implementation of the audio storage repository
pub struct S3AudioStorageRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
    region: Option<String>,
}

impl S3AudioStorageRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String, region: Option<String>) -> Self {
        Self {
            s3_client,
            bucket,
            region,
        }
    }
}

#[async_trait]
impl AudioStorageRepository for S3AudioStorageRepository {
    async fn upload(&self, path: &Path, key: &str) -> Result<String, StorageRepositoryError> {
        let content = tokio::fs::read(path).await?;

        tracing::info!(
            bucket = %self.bucket,
            key,
            size_bytes = content.len(),
            "Uploading audio to S3"
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content))
            .content_type(AUDIO_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, bucket = %self.bucket, key, "S3 put_object failed");
                StorageRepositoryError::Upload(format!("{:?}", e))
            })?;

        self.s3_client
            .put_object_acl()
            .acl(ObjectCannedAcl::PublicRead)
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, bucket = %self.bucket, key, "S3 put_object_acl failed");
                StorageRepositoryError::Acl(format!("{:?}", e))
            })?;

        let url = public_object_url(&self.bucket, self.region.as_deref(), key);
        tracing::debug!(url = %url, "Audio published");

        Ok(url)
    }
}
