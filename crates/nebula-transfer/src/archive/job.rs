//! Archive job state and outcome types.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use nebula_core::error::AppError;
use nebula_core::types::FileId;

use super::naming;
use crate::error::ArchiveError;

/// Completion status of an archive job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Fetches are still outstanding.
    #[default]
    Pending,
    /// The archive was produced but some fetches failed.
    Partial,
    /// Every input file made it into the archive.
    Complete,
    /// No archive was produced.
    Failed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Partial => "partial",
            Self::Complete => "complete",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// What to do when some fetches in a job fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArchivePolicy {
    /// A single failing fetch aborts the whole job; no archive is produced.
    AllOrNothing,
    /// Successfully fetched files are archived and the failures reported.
    #[default]
    BestEffort,
}

impl ArchivePolicy {
    /// Return the policy as its configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllOrNothing => "all-or-nothing",
            Self::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for ArchivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArchivePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all-or-nothing" => Ok(Self::AllOrNothing),
            "best-effort" => Ok(Self::BestEffort),
            _ => Err(AppError::validation(format!(
                "Invalid archive policy: '{s}'. Expected 'best-effort' or 'all-or-nothing'"
            ))),
        }
    }
}

/// Transient accumulation state of one bulk-download invocation.
///
/// Owns the entry-name uniqueness invariant: two records sharing a display
/// name land under distinct entry names, never overwriting each other.
#[derive(Debug, Default)]
pub struct ArchiveJob {
    taken: HashSet<String>,
    entries: Vec<(String, Bytes)>,
    failed: Vec<FileId>,
    status: JobStatus,
}

/// The parts of a job that survived policy resolution.
#[derive(Debug)]
pub(crate) struct ResolvedJob {
    pub entries: Vec<(String, Bytes)>,
    pub failed: Vec<FileId>,
    pub status: JobStatus,
}

impl ArchiveJob {
    /// Start an empty, pending job.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched file under its display name. Returns the entry name
    /// actually used after disambiguation.
    pub fn push_entry(&mut self, display_name: &str, data: Bytes) -> String {
        let name = naming::unique_entry_name(display_name, &self.taken);
        self.taken.insert(name.clone());
        self.entries.push((name.clone(), data));
        name
    }

    /// Record a failed fetch.
    pub fn push_failure(&mut self, id: FileId) {
        self.failed.push(id);
    }

    /// Entries accumulated so far, in insertion order.
    pub fn entries(&self) -> &[(String, Bytes)] {
        &self.entries
    }

    /// Identifiers whose fetches failed.
    pub fn failed(&self) -> &[FileId] {
        &self.failed
    }

    /// Current status (`Pending` until resolved).
    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// Apply the partial-failure policy, consuming the job.
    pub(crate) fn resolve(mut self, policy: ArchivePolicy) -> Result<ResolvedJob, ArchiveError> {
        if self.entries.is_empty() && !self.failed.is_empty() {
            return Err(ArchiveError::TotalFailure);
        }
        if !self.failed.is_empty() && policy == ArchivePolicy::AllOrNothing {
            return Err(ArchiveError::Aborted {
                failed: self.failed,
            });
        }

        self.status = if self.failed.is_empty() {
            JobStatus::Complete
        } else {
            JobStatus::Partial
        };
        Ok(ResolvedJob {
            entries: self.entries,
            failed: self.failed,
            status: self.status,
        })
    }
}

/// The outcome of a successful (complete or partial) archive build.
#[derive(Debug, Clone)]
pub struct BuiltArchive {
    /// The serialized ZIP buffer.
    pub data: Bytes,
    /// Entry names in archive order.
    pub entries: Vec<String>,
    /// Identifiers that could not be fetched (best-effort only).
    pub failed: Vec<FileId>,
    /// `Complete` when `failed` is empty, `Partial` otherwise.
    pub status: JobStatus,
}
