//! Abstraction over the artifact sink.

use crate::error::WriteError;

/// A named-blob sink addressed by bucket and key. A put fully overwrites any
/// prior object at the key.
#[async_trait::async_trait]
pub trait ObjectSink: Send + Sync {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), WriteError>;
}
