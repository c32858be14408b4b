//! Authentication and session persistence flows.

use std::sync::Arc;

use nebula_api::dto::request::{LoginRequest, SignupRequest, VerifyOtpRequest};
use nebula_api::Session;
use nebula_core::config::session::SessionConfig;
use nebula_core::error::ErrorKind;

use crate::helpers::{self, StubServer};

#[tokio::test]
async fn test_signup_and_otp_verification() {
    let server = StubServer::start().await;
    let client = helpers::client_for(&server);

    let message = client
        .api
        .signup(&SignupRequest {
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "hopper-flow-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(message, "User registered successfully");

    let message = client
        .api
        .verify_otp(&VerifyOtpRequest {
            email: "grace@example.com".to_string(),
            otp: "123456".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(message, "Account verified");

    let err = client
        .api
        .verify_otp(&VerifyOtpRequest {
            email: "grace@example.com".to_string(),
            otp: "000000".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Client);
}

#[tokio::test]
async fn test_login_persists_session_and_a_fresh_session_restores_it() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    assert!(client.session.is_authenticated());
    assert_eq!(client.session.user().unwrap().username, "ada");

    // A fresh process sees both keys again.
    let restored = Session::new(&SessionConfig {
        state_dir: client.state_dir.path().to_string_lossy().to_string(),
    });
    restored.init().unwrap();
    assert_eq!(restored.token().as_deref(), Some(helpers::TEST_TOKEN));
    assert_eq!(restored.user().unwrap().email, helpers::TEST_EMAIL);
}

#[tokio::test]
async fn test_logout_clears_both_persisted_keys() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    client.api.logout().unwrap();
    assert!(!client.session.is_authenticated());
    assert!(!client.state_dir.path().join("token").exists());
    assert!(!client.state_dir.path().join("user.json").exists());

    // State directory restores to unauthenticated on next start.
    let restored = Session::new(&SessionConfig {
        state_dir: client.state_dir.path().to_string_lossy().to_string(),
    });
    restored.init().unwrap();
    assert!(!restored.is_authenticated());
}

#[tokio::test]
async fn test_wrong_password_is_a_client_error() {
    let server = StubServer::start().await;
    let client = helpers::client_for(&server);

    let err = client
        .api
        .login(&LoginRequest {
            email: helpers::TEST_EMAIL.to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Client);
    assert!(err.message.contains("Invalid credentials"));
    assert!(!client.session.is_authenticated());
}

#[tokio::test]
async fn test_requests_without_credential_are_unauthorized() {
    let server = StubServer::start().await;
    let client = helpers::client_for(&server);

    let err = client.api.list_files().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_admin_endpoint_with_non_admin_credential_is_unauthorized() {
    let server = StubServer::start().await;
    let client = helpers::logged_in_client(&server).await;

    let err = client.api.list_all_users().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    let server = StubServer::start().await;
    let client = helpers::client_for(&server);
    // Reuse the client machinery against a port nothing listens on.
    let dead = Arc::clone(&client.session);
    let api = nebula_api::ApiClient::new(
        &nebula_core::config::api::ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_seconds: 2,
            connect_timeout_seconds: 1,
        },
        dead,
    )
    .unwrap();

    let err = api.list_files().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
}
