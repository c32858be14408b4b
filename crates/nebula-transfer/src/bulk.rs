//! Bulk-selection coordination and batch dispatch.

use std::path::{Path, PathBuf};

use futures::future;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use nebula_core::error::AppError;
use nebula_core::result::AppResult;
use nebula_core::traits::FileRemover;
use nebula_core::types::{FileId, SelectionSet};
use nebula_entity::file::FileRecord;

use crate::archive::builder::ArchiveBuilder;
use crate::archive::job::JobStatus;
use crate::blob::BlobStore;

/// Per-item outcome of a bulk delete.
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteReport {
    /// Identifiers deleted successfully.
    pub deleted: Vec<FileId>,
    /// Identifiers that failed, with the failure message.
    pub failed: Vec<(FileId, String)>,
}

impl BulkDeleteReport {
    /// Whether every individual delete succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of a bulk download.
#[derive(Debug, Clone, Serialize)]
pub struct BulkDownloadReport {
    /// Where the archive was saved.
    pub path: PathBuf,
    /// Size of the archive on disk.
    pub bytes_written: u64,
    /// Entry names in archive order.
    pub entries: Vec<String>,
    /// Identifiers that could not be fetched.
    pub failed: Vec<FileId>,
    /// Final job status (`complete` or `partial`).
    pub status: JobStatus,
}

/// Tracks the selected set and dispatches batch operations over it.
///
/// The selection is owned here and mutated from the single coordinating
/// task; it is cleared on explicit request or when a bulk operation fully
/// succeeds.
#[derive(Debug, Default)]
pub struct BulkCoordinator {
    selection: SelectionSet,
}

impl BulkCoordinator {
    /// Create a coordinator with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Flip one file's membership.
    pub fn toggle(&mut self, id: FileId) {
        self.selection.toggle(id);
    }

    /// Toggle selection of everything currently visible (see
    /// [`SelectionSet::select_all_visible`]).
    pub fn select_all_visible(&mut self, visible: &[FileId]) {
        self.selection.select_all_visible(visible);
    }

    /// Clear the selection explicitly.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// The records from a listing snapshot that are currently selected.
    pub fn selected_records(&self, listing: &[FileRecord]) -> Vec<FileRecord> {
        listing
            .iter()
            .filter(|r| self.selection.contains(&r.id))
            .cloned()
            .collect()
    }

    /// Delete every selected file, one concurrent request per identifier.
    ///
    /// Outcomes are aggregated per item; the selection is cleared only if
    /// every delete succeeded.
    pub async fn delete_selected(
        &mut self,
        remover: &dyn FileRemover,
    ) -> AppResult<BulkDeleteReport> {
        let ids = self.selection.to_vec();
        if ids.is_empty() {
            return Err(AppError::validation("Nothing is selected"));
        }
        info!(files = ids.len(), "Dispatching bulk delete");

        let outcomes = future::join_all(ids.into_iter().map(|id| async move {
            let result = remover.remove(&id).await;
            (id, result)
        }))
        .await;

        let mut report = BulkDeleteReport {
            deleted: Vec::new(),
            failed: Vec::new(),
        };
        for (id, result) in outcomes {
            match result {
                Ok(()) => report.deleted.push(id),
                Err(e) => {
                    warn!(file_id = %id, error = %e, "Delete failed");
                    report.failed.push((id, e.message));
                }
            }
        }

        if report.is_success() {
            self.selection.clear();
        }
        Ok(report)
    }

    /// Download every selected file as one ZIP archive saved at `dest`.
    ///
    /// The built archive is materialized through the blob store, the
    /// save-to-disk action is dispatched, and the handle is released
    /// immediately afterwards. The selection is cleared only on a
    /// `complete` outcome.
    pub async fn download_selected(
        &mut self,
        listing: &[FileRecord],
        builder: &ArchiveBuilder,
        blobs: &BlobStore,
        dest: &Path,
        cancel: &CancellationToken,
    ) -> AppResult<BulkDownloadReport> {
        let records = self.selected_records(listing);
        if records.is_empty() {
            return Err(AppError::validation("Nothing is selected"));
        }

        let archive = builder.build_archive(&records, cancel).await?;

        let handle = blobs.materialize(archive.data.clone(), Some("application/zip".to_string()));
        let save_result = blobs.save_to(handle, dest).await;
        blobs.release(handle);
        let bytes_written = save_result?;

        if archive.status == JobStatus::Complete {
            self.selection.clear();
        }

        Ok(BulkDownloadReport {
            path: dest.to_path_buf(),
            bytes_written,
            entries: archive.entries,
            failed: archive.failed,
            status: archive.status,
        })
    }
}
