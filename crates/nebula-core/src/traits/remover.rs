//! Deletion seam for bulk file removal.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::FileId;

/// Trait for deleting a stored file by identifier.
#[async_trait]
pub trait FileRemover: Send + Sync {
    /// Delete one file.
    async fn remove(&self, id: &FileId) -> AppResult<()>;
}
