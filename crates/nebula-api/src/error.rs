//! Transport error taxonomy.

use thiserror::Error;

use nebula_core::error::{AppError, ErrorKind};

/// Failure of a single HTTP request.
///
/// Requests are never retried automatically — the caller decides.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server rejected the credential (HTTP 401/403).
    #[error("unauthorized ({status}): {message}")]
    Unauthorized {
        /// The HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },
    /// The request never completed (connection failure, timeout).
    #[error("network error: {source}")]
    Network {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The server failed to process the request (HTTP 5xx).
    #[error("server error ({status}): {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },
    /// The server rejected the request (other HTTP 4xx).
    #[error("request rejected ({status}): {message}")]
    Client {
        /// The HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        let kind = match &err {
            TransportError::Unauthorized { .. } => ErrorKind::Unauthorized,
            TransportError::Network { .. } => ErrorKind::Network,
            TransportError::Server { .. } => ErrorKind::Server,
            TransportError::Client { .. } => ErrorKind::Client,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
