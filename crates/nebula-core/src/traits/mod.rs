//! Trait seams between the transport layer and the transfer machinery.
//!
//! The traits are defined here in `nebula-core` and implemented by the HTTP
//! client in `nebula-api`, so the archive builder and bulk coordinator can
//! be exercised against in-memory fakes.

pub mod fetcher;
pub mod remover;

pub use fetcher::{FetchedFile, FileFetcher};
pub use remover::FileRemover;
