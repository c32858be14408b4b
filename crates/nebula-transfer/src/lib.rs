//! # nebula-transfer
//!
//! The transfer machinery of the NebulaShare client: the archive builder
//! (concurrent byte fetches packed into one ZIP), the blob store tracking
//! transient byte-buffer handles, and the bulk-selection coordinator that
//! dispatches batch operations.

pub mod archive;
pub mod blob;
pub mod bulk;
pub mod error;

pub use archive::builder::ArchiveBuilder;
pub use archive::job::{ArchivePolicy, BuiltArchive, JobStatus};
pub use blob::{BlobHandle, BlobStore};
pub use bulk::BulkCoordinator;
pub use error::ArchiveError;
