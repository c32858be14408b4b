//! File storage operations.

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::{debug, info};

use nebula_core::error::{AppError, ErrorKind};
use nebula_core::result::AppResult;
use nebula_core::traits::FetchedFile;
use nebula_core::types::FileId;
use nebula_entity::file::FileRecord;
use nebula_entity::share::{ShareLink, ShareMode};

use crate::dto::request::ShareRequest;
use crate::dto::response::{MessageResponse, ShareLinkResponse};

use super::ApiClient;

/// MIME type declared for uploads, derived from the file extension.
fn guess_mime(name: &str) -> &'static str {
    match Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("html") => "text/html",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

impl ApiClient {
    /// List the current user's files.
    pub async fn list_files(&self) -> AppResult<Vec<FileRecord>> {
        self.get_json("/files/user").await
    }

    /// Upload one file from disk as a multipart request.
    pub async fn upload(&self, path: &Path) -> AppResult<FileRecord> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation(format!("Not a file path: {}", path.display())))?
            .to_string();

        let data = tokio::fs::read(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read {}", path.display()),
                e,
            )
        })?;
        let size = data.len();

        let part = Part::bytes(data)
            .file_name(name.clone())
            .mime_str(guess_mime(&name))
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Invalid MIME type", e))?;
        let form = Form::new().part("file", part);

        let mut builder = self
            .http_builder(Method::POST, "/files/upload")
            .multipart(form);
        if let Some(token) = self.session().token() {
            builder = builder.bearer_auth(token);
        }

        let response = Self::dispatch(builder).await?;
        let record: FileRecord = Self::decode(response).await?;
        info!(file_id = %record.id, file_name = %record.file_name, bytes = size, "Uploaded file");
        Ok(record)
    }

    /// Fetch one file's complete content.
    pub async fn download(&self, id: &FileId) -> AppResult<FetchedFile> {
        let response = self
            .request(Method::GET, &format!("/files/download/{id}"), None)
            .await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let data = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, "Failed to read download body", e)
        })?;

        debug!(file_id = %id, bytes = data.len(), "Fetched file content");
        Ok(FetchedFile { data, content_type })
    }

    /// Delete one file.
    pub async fn delete_file(&self, id: &FileId) -> AppResult<String> {
        let response = self
            .request(Method::DELETE, &format!("/files/{id}"), None)
            .await?;
        let body: MessageResponse = Self::decode(response).await?;
        info!(file_id = %id, "Deleted file");
        Ok(body.message)
    }

    /// Request a shareable link for one file.
    pub async fn share_file(&self, id: &FileId, mode: ShareMode) -> AppResult<ShareLink> {
        let req = ShareRequest { mode };
        let response: ShareLinkResponse = self
            .send_json(
                Method::POST,
                &format!("/files/share/{id}"),
                serde_json::to_value(&req)?,
            )
            .await?;

        Ok(ShareLink {
            file_id: id.clone(),
            mode,
            url: response.link,
        })
    }

    /// Start a request builder for endpoints that need a non-JSON body.
    fn http_builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }
}
