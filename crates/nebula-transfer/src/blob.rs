//! Transient byte-buffer handles with scoped lifetimes.
//!
//! The store pairs every [`materialize`](BlobStore::materialize) with
//! exactly one [`release`](BlobStore::release) on the consuming flow's
//! teardown path. A leaked handle is a resource leak, not a crash;
//! [`outstanding`](BlobStore::outstanding) exists so tests can assert the
//! count returns to its pre-flow value.

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use nebula_core::error::AppError;
use nebula_core::result::AppResult;

/// Opaque reference to a materialized byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobHandle(Uuid);

impl fmt::Display for BlobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct BlobEntry {
    data: Bytes,
    mime_type: Option<String>,
}

/// Registry of live byte-buffer handles.
#[derive(Debug, Default)]
pub struct BlobStore {
    entries: DashMap<Uuid, BlobEntry>,
}

impl BlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a byte buffer and hand back a dereferenceable handle.
    pub fn materialize(&self, data: Bytes, mime_type: Option<String>) -> BlobHandle {
        let id = Uuid::new_v4();
        debug!(handle = %id, bytes = data.len(), "Materialized blob");
        self.entries.insert(id, BlobEntry { data, mime_type });
        BlobHandle(id)
    }

    /// Invalidate a handle. Returns `false` if it was already released.
    pub fn release(&self, handle: BlobHandle) -> bool {
        let released = self.entries.remove(&handle.0).is_some();
        if released {
            debug!(handle = %handle, "Released blob");
        }
        released
    }

    /// Number of live handles.
    pub fn outstanding(&self) -> usize {
        self.entries.len()
    }

    /// Dereference a handle to its bytes.
    pub fn bytes(&self, handle: BlobHandle) -> AppResult<Bytes> {
        self.entries
            .get(&handle.0)
            .map(|e| e.data.clone())
            .ok_or_else(|| AppError::storage(format!("{handle} is not live")))
    }

    /// Dereference a handle to its declared MIME type.
    pub fn mime_type(&self, handle: BlobHandle) -> AppResult<Option<String>> {
        self.entries
            .get(&handle.0)
            .map(|e| e.mime_type.clone())
            .ok_or_else(|| AppError::storage(format!("{handle} is not live")))
    }

    /// Write a live blob to disk — the save-to-disk trigger.
    pub async fn save_to(&self, handle: BlobHandle, path: &Path) -> AppResult<u64> {
        let data = self.bytes(handle)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &data).await?;
        debug!(handle = %handle, path = %path.display(), bytes = data.len(), "Saved blob");
        Ok(data.len() as u64)
    }
}
