//! Shared test helpers: an in-process stub of the NebulaShare backend.
//!
//! The stub keeps stored files in memory, accepts one fixed credential, and
//! can be told to fail individual downloads so partial-failure branches can
//! be exercised end to end.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use nebula_api::dto::request::LoginRequest;
use nebula_api::{ApiClient, Session};
use nebula_core::config::api::ApiConfig;
use nebula_core::config::session::SessionConfig;

/// The only credential the stub accepts.
pub const TEST_EMAIL: &str = "ada@example.com";
pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_TOKEN: &str = "stub-token-1";

/// One stored file in the stub backend.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub name: String,
    pub mime: String,
    pub data: Vec<u8>,
}

/// Mutable stub backend state.
#[derive(Debug, Default)]
pub struct StubState {
    files: Mutex<HashMap<String, StoredFile>>,
    failing_downloads: Mutex<HashSet<String>>,
    next_id: AtomicU64,
}

impl StubState {
    /// Seed a file directly, returning its id.
    pub fn add_file(&self, name: &str, mime: &str, data: &[u8]) -> String {
        let id = format!("f{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.files.lock().unwrap().insert(
            id.clone(),
            StoredFile {
                name: name.to_string(),
                mime: mime.to_string(),
                data: data.to_vec(),
            },
        );
        id
    }

    /// Make downloads of the given id answer HTTP 500.
    pub fn fail_download(&self, id: &str) {
        self.failing_downloads.lock().unwrap().insert(id.to_string());
    }

    /// Whether a file is still stored.
    pub fn has_file(&self, id: &str) -> bool {
        self.files.lock().unwrap().contains_key(id)
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

/// An in-process stub backend on an ephemeral port.
pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());

        let router = Router::new()
            .route("/api/auth/signup", post(signup))
            .route("/api/auth/verify-otp", post(verify_otp))
            .route("/api/auth/login", post(login))
            .route("/api/user/profile", get(profile).put(update_profile))
            .route("/api/user/change-password", put(change_password))
            .route("/api/files/upload", post(upload))
            .route("/api/files/user", get(list_files))
            .route("/api/files/download/{id}", get(download))
            .route("/api/files/{id}", delete(delete_file))
            .route("/api/files/share/{id}", post(share))
            .route("/api/admin/users", get(admin_users))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub serve");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }
}

/// A client wired to a stub server with an isolated state directory.
pub struct TestClient {
    pub api: ApiClient,
    pub session: Arc<Session>,
    pub state_dir: tempfile::TempDir,
}

/// Build an unauthenticated client against the stub.
pub fn client_for(server: &StubServer) -> TestClient {
    let state_dir = tempfile::tempdir().expect("tempdir");
    let session = Arc::new(Session::new(&SessionConfig {
        state_dir: state_dir.path().to_string_lossy().to_string(),
    }));
    session.init().expect("session init");

    let api = ApiClient::new(
        &ApiConfig {
            base_url: server.base_url.clone(),
            request_timeout_seconds: 10,
            connect_timeout_seconds: 5,
        },
        Arc::clone(&session),
    )
    .expect("build client");

    TestClient {
        api,
        session,
        state_dir,
    }
}

/// Build a client and log it in with the fixed credential.
pub async fn logged_in_client(server: &StubServer) -> TestClient {
    let client = client_for(server);
    client
        .api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("login");
    client
}

fn test_user_json() -> Value {
    json!({
        "id": "u1",
        "username": "ada",
        "email": TEST_EMAIL,
        "role": "USER",
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Full authentication is required"})),
    )
        .into_response()
}

fn record_json(id: &str, file: &StoredFile) -> Value {
    json!({
        "id": id,
        "fileName": file.name,
        "fileType": file.mime,
        "fileSize": file.data.len(),
        "createdAt": chrono::Utc::now().to_rfc3339(),
    })
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body.get("username").and_then(Value::as_str).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Username is required"})),
        )
            .into_response();
    }
    Json(json!({"message": "User registered successfully"})).into_response()
}

async fn verify_otp(Json(body): Json<Value>) -> Response {
    match body.get("otp").and_then(Value::as_str) {
        Some("123456") => Json(json!({"message": "Account verified"})).into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid or expired OTP"})),
        )
            .into_response(),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body.get("email").and_then(Value::as_str);
    let password = body.get("password").and_then(Value::as_str);
    if email == Some(TEST_EMAIL) && password == Some(TEST_PASSWORD) {
        Json(json!({"token": TEST_TOKEN, "user": test_user_json()})).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response()
    }
}

async fn profile(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(test_user_json()).into_response()
}

async fn update_profile(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut user = test_user_json();
    if let Some(username) = body.get("username").and_then(Value::as_str) {
        user["username"] = json!(username);
    }
    if let Some(email) = body.get("email").and_then(Value::as_str) {
        user["email"] = json!(email);
    }
    Json(json!({"message": "Profile updated successfully!", "user": user})).into_response()
}

async fn change_password(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match body.get("currentPassword").and_then(Value::as_str) {
        Some(TEST_PASSWORD) => {
            Json(json!({"message": "Password changed successfully."})).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Current password is incorrect"})),
        )
            .into_response(),
    }
}

async fn upload(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or("unnamed").to_string();
            let mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = match field.bytes().await {
                Ok(b) => b,
                Err(_) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"message": "Could not read upload"})),
                    )
                        .into_response();
                }
            };
            let id = state.add_file(&name, &mime, &data);
            let files = state.files.lock().unwrap();
            return Json(record_json(&id, &files[&id])).into_response();
        }
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({"message": "Missing file part"})),
    )
        .into_response()
}

async fn list_files(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let files = state.files.lock().unwrap();
    let mut records: Vec<(String, Value)> = files
        .iter()
        .map(|(id, f)| (id.clone(), record_json(id, f)))
        .collect();
    records.sort_by(|a, b| a.0.cmp(&b.0));
    let listing: Vec<Value> = records.into_iter().map(|(_, r)| r).collect();
    Json(json!(listing)).into_response()
}

async fn download(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if state.failing_downloads.lock().unwrap().contains(&id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Storage backend unavailable"})),
        )
            .into_response();
    }
    let files = state.files.lock().unwrap();
    match files.get(&id) {
        Some(file) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, file.mime.clone())],
            file.data.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "File not found"})),
        )
            .into_response(),
    }
}

async fn delete_file(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let removed = state.files.lock().unwrap().remove(&id).is_some();
    if removed {
        Json(json!({"message": "File deleted successfully."})).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "File not found"})),
        )
            .into_response()
    }
}

async fn share(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if !state.files.lock().unwrap().contains_key(&id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "File not found"})),
        )
            .into_response();
    }
    let mode = body
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("PERMANENT");
    Json(json!({"link": format!("http://stub/share/{id}?mode={mode}")})).into_response()
}

async fn admin_users(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    // The fixed test user is not an admin.
    (
        StatusCode::FORBIDDEN,
        Json(json!({"message": "Admin role required"})),
    )
        .into_response()
}
