//! S3-backed artifact sink.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::error::WriteError;
use crate::services::object_store::ObjectSink;

/// [`ObjectSink`] over an S3 bucket using the ambient AWS configuration
/// (env vars, instance profile, etc.).
pub struct S3Sink {
    client: aws_sdk_s3::Client,
}

impl S3Sink {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
        }
    }
}

#[async_trait]
impl ObjectSink for S3Sink {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), WriteError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body.into())
            .content_type("text/csv")
            .send()
            .await
            .map_err(|e| WriteError {
                bucket: bucket.to_string(),
                key: key.to_string(),
                detail: DisplayErrorContext(e).to_string(),
            })?;

        Ok(())
    }
}
