//! Archive error taxonomy.

use thiserror::Error;

use nebula_core::error::{AppError, ErrorKind};
use nebula_core::types::FileId;

/// Failure of a bulk archive job.
///
/// Under the best-effort policy a job with some failed fetches is not an
/// error: the artifact is still produced and the failed identifiers travel
/// in the [`BuiltArchive`](crate::archive::job::BuiltArchive) report.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A fetch failed under the all-or-nothing policy; no archive was
    /// produced. Carries the identifiers that could not be fetched.
    #[error("{} file(s) could not be fetched; archive aborted", failed.len())]
    Aborted {
        /// The identifiers whose fetches failed.
        failed: Vec<FileId>,
    },
    /// Every fetch failed; no archive was produced.
    #[error("no files could be fetched")]
    TotalFailure,
    /// ZIP serialization failed. Fatal and unexpected.
    #[error("archive serialization failed: {0}")]
    Encoding(#[from] zip::result::ZipError),
    /// The job was cancelled before completion.
    #[error("archive job cancelled")]
    Cancelled,
}

impl From<ArchiveError> for AppError {
    fn from(err: ArchiveError) -> Self {
        AppError::with_source(ErrorKind::Archive, err.to_string(), err)
    }
}
