//! Byte-fetch seam for file downloads.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;
use crate::types::FileId;

/// The payload of a successful byte fetch.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    /// The file content.
    pub data: Bytes,
    /// Content type declared by the server, if any.
    pub content_type: Option<String>,
}

/// Trait for fetching a stored file's bytes by identifier.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Fetch the complete content of one file.
    async fn fetch_bytes(&self, id: &FileId) -> AppResult<FetchedFile>;
}
