//! The archive builder: concurrent fetch fan-out packed into one ZIP.

use std::io::{Cursor, Write};
use std::sync::Arc;

use bytes::Bytes;
use futures::future;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use nebula_core::traits::FileFetcher;
use nebula_entity::file::FileRecord;

use super::job::{ArchiveJob, ArchivePolicy, BuiltArchive};
use crate::error::ArchiveError;

/// Builds one ZIP archive from a set of file records.
pub struct ArchiveBuilder {
    fetcher: Arc<dyn FileFetcher>,
    policy: ArchivePolicy,
}

impl std::fmt::Debug for ArchiveBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveBuilder")
            .field("policy", &self.policy)
            .finish()
    }
}

impl ArchiveBuilder {
    /// Create a builder fetching through the given seam.
    pub fn new(fetcher: Arc<dyn FileFetcher>, policy: ArchivePolicy) -> Self {
        Self { fetcher, policy }
    }

    /// The configured partial-failure policy.
    pub fn policy(&self) -> ArchivePolicy {
        self.policy
    }

    /// Fetch every record's bytes and pack them into one deflate ZIP.
    ///
    /// All fetches are issued concurrently with no explicit cap — bounded
    /// only by the transport's connection pool — and the builder joins all
    /// of them before deciding the outcome. Completion order carries no
    /// meaning. Cancelling the token aborts outstanding fetches and fails
    /// the job.
    pub async fn build_archive(
        &self,
        records: &[FileRecord],
        cancel: &CancellationToken,
    ) -> Result<BuiltArchive, ArchiveError> {
        info!(files = records.len(), policy = %self.policy, "Building archive");

        let fetches = records.iter().map(|record| {
            let fetcher = Arc::clone(&self.fetcher);
            async move {
                tokio::select! {
                    _ = cancel.cancelled() => None,
                    result = fetcher.fetch_bytes(&record.id) => Some((record, result)),
                }
            }
        });
        let outcomes = future::join_all(fetches).await;

        if cancel.is_cancelled() {
            warn!("Archive job cancelled; discarding fetched content");
            return Err(ArchiveError::Cancelled);
        }

        let mut job = ArchiveJob::new();
        for (record, result) in outcomes.into_iter().flatten() {
            match result {
                Ok(fetched) => {
                    job.push_entry(&record.file_name, fetched.data);
                }
                Err(e) => {
                    warn!(file_id = %record.id, error = %e, "Fetch failed");
                    job.push_failure(record.id.clone());
                }
            }
        }

        let resolved = job.resolve(self.policy)?;
        let (data, names) = serialize_zip(&resolved.entries)?;
        info!(
            entries = names.len(),
            failed = resolved.failed.len(),
            bytes = data.len(),
            status = %resolved.status,
            "Archive built"
        );

        Ok(BuiltArchive {
            data,
            entries: names,
            failed: resolved.failed,
            status: resolved.status,
        })
    }
}

/// Serialize named entries into one deflate-compressed ZIP buffer.
fn serialize_zip(entries: &[(String, Bytes)]) -> Result<(Bytes, Vec<String>), ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut names = Vec::with_capacity(entries.len());
    for (name, data) in entries {
        writer.start_file(name.as_str(), options)?;
        writer
            .write_all(data)
            .map_err(|e| ArchiveError::Encoding(e.into()))?;
        names.push(name.clone());
    }

    let cursor = writer.finish()?;
    Ok((Bytes::from(cursor.into_inner()), names))
}
