//! The NebulaShare HTTP client.
//!
//! One central [`ApiClient::request`] attaches the bearer credential and
//! maps failures into the transport taxonomy; the per-area modules
//! (`auth`, `user`, `files`, `admin`) build typed operations on top of it.

mod admin;
mod auth;
mod files;
mod user;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use nebula_core::config::api::ApiConfig;
use nebula_core::error::{AppError, ErrorKind};
use nebula_core::result::AppResult;
use nebula_core::traits::{FetchedFile, FileFetcher, FileRemover};
use nebula_core::types::FileId;

use crate::dto::response::ErrorBody;
use crate::error::TransportError;
use crate::session::Session;

/// Client for the NebulaShare REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client for the configured backend, sharing the given session.
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client attaches credentials from.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request against the backend.
    ///
    /// Attaches `Authorization: Bearer <token>` when a session credential is
    /// present. Never retries. Non-success statuses are mapped to the
    /// transport taxonomy: 401/403 → `Unauthorized`, 5xx → `Server`, other
    /// 4xx → `Client`; requests that never complete are `Network`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, TransportError> {
        let url = self.url(path);
        debug!(%method, %url, "Dispatching request");

        let mut builder = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        Self::dispatch(builder).await
    }

    /// Send a prepared request and map the outcome.
    pub(crate) async fn dispatch(
        builder: reqwest::RequestBuilder,
    ) -> Result<Response, TransportError> {
        let response = builder
            .send()
            .await
            .map_err(|source| TransportError::Network { source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        match status.as_u16() {
            401 | 403 => Err(TransportError::Unauthorized {
                status: status.as_u16(),
                message,
            }),
            s if status.is_server_error() => Err(TransportError::Server { status: s, message }),
            s => Err(TransportError::Client { status: s, message }),
        }
    }

    /// Pull the `{message}` out of an error body, falling back to the status.
    async fn error_message(response: Response) -> String {
        let status = response.status();
        match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("HTTP {status}")),
            Err(_) => format!("HTTP {status}"),
        }
    }

    /// Read a response body and deserialize it.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, "Failed to read response body", e)
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.request(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let response = self.request(method, path, Some(body)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl FileFetcher for ApiClient {
    async fn fetch_bytes(&self, id: &FileId) -> AppResult<FetchedFile> {
        self.download(id).await
    }
}

#[async_trait]
impl FileRemover for ApiClient {
    async fn remove(&self, id: &FileId) -> AppResult<()> {
        self.delete_file(id).await.map(|_| ())
    }
}
