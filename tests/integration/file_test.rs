//! Upload, download, delete, share, and profile flows.

use nebula_api::dto::request::{ChangePasswordRequest, UpdateProfileRequest};
use nebula_core::error::ErrorKind;
use nebula_core::types::FileId;
use nebula_entity::share::ShareMode;

use crate::helpers::{self, StubServer};

#[tokio::test]
async fn test_upload_then_download_round_trips_exact_bytes() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    // A 10-byte text file.
    let payload = b"0123456789";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, payload).unwrap();

    let record = client.api.upload(&path).await.unwrap();
    assert_eq!(record.file_name, "a.txt");
    assert_eq!(record.file_size, 10);
    assert_eq!(record.file_type, "text/plain");

    let fetched = client.api.download(&record.id).await.unwrap();
    assert_eq!(fetched.data.len(), 10);
    assert_eq!(fetched.data.as_ref(), payload);
    assert_eq!(fetched.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn test_listing_reflects_uploads() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    server.state.add_file("one.txt", "text/plain", b"1");
    server.state.add_file("two.txt", "text/plain", b"22");

    let listing = client.api.list_files().await.unwrap();
    assert_eq!(listing.len(), 2);
    let names: Vec<&str> = listing.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(names, vec!["one.txt", "two.txt"]);
}

#[tokio::test]
async fn test_delete_removes_the_file() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let id = server.state.add_file("gone.txt", "text/plain", b"x");
    let message = client.api.delete_file(&FileId::from(id.as_str())).await.unwrap();
    assert_eq!(message, "File deleted successfully.");
    assert!(!server.state.has_file(&id));

    // Deleting again is rejected by the server.
    let err = client
        .api
        .delete_file(&FileId::from(id.as_str()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Client);
}

#[tokio::test]
async fn test_share_returns_an_opaque_link() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let id = server.state.add_file("doc.pdf", "application/pdf", b"pdf");
    let link = client
        .api
        .share_file(&FileId::from(id.as_str()), ShareMode::OneTime)
        .await
        .unwrap();

    assert_eq!(link.file_id, FileId::from(id.as_str()));
    assert_eq!(link.mode, ShareMode::OneTime);
    assert!(!link.url.is_empty());
}

#[tokio::test]
async fn test_download_of_missing_file_is_not_found_client_error() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let err = client
        .api
        .download(&FileId::from("missing"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Client);
}

#[tokio::test]
async fn test_profile_update_refreshes_the_session_cache() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let user = client
        .api
        .update_profile(&UpdateProfileRequest {
            username: "ada-lovelace".to_string(),
            email: helpers::TEST_EMAIL.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "ada-lovelace");
    assert_eq!(client.session.user().unwrap().username, "ada-lovelace");
}

#[tokio::test]
async fn test_change_password_requires_the_current_one() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let message = client
        .api
        .change_password(&ChangePasswordRequest {
            current_password: helpers::TEST_PASSWORD.to_string(),
            new_password: "a-new-password-9".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(message, "Password changed successfully.");

    let err = client
        .api
        .change_password(&ChangePasswordRequest {
            current_password: "wrong".to_string(),
            new_password: "a-new-password-9".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Client);
}
