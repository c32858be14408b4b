//! # nebula-api
//!
//! Transport layer for the NebulaShare backend: a reqwest-based client with
//! bearer-credential attachment, typed request/response DTOs per endpoint,
//! and the process-wide session state persisted across invocations.

pub mod client;
pub mod dto;
pub mod error;
pub mod session;

pub use client::ApiClient;
pub use error::TransportError;
pub use session::Session;
