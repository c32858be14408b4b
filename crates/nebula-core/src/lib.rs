//! # nebula-core
//!
//! Core crate for the NebulaShare client. Contains configuration schemas,
//! typed identifiers, the selection-set type, trait seams for the transfer
//! machinery, and the unified error system.
//!
//! This crate has **no** internal dependencies on other NebulaShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
