//! Account lifecycle operations.

use reqwest::Method;
use tracing::info;
use validator::Validate;

use nebula_core::error::AppError;
use nebula_core::result::AppResult;
use nebula_entity::user::User;

use crate::dto::request::{LoginRequest, SignupRequest, VerifyOtpRequest};
use crate::dto::response::{LoginResponse, MessageResponse};

use super::ApiClient;

impl ApiClient {
    /// Register a new account. The server emails an OTP that must be
    /// verified before the first login.
    pub async fn signup(&self, req: &SignupRequest) -> AppResult<String> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: MessageResponse = self
            .send_json(Method::POST, "/auth/signup", serde_json::to_value(req)?)
            .await?;
        info!(username = %req.username, "Account registered");
        Ok(response.message)
    }

    /// Confirm the OTP emailed during signup.
    pub async fn verify_otp(&self, req: &VerifyOtpRequest) -> AppResult<String> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: MessageResponse = self
            .send_json(Method::POST, "/auth/verify-otp", serde_json::to_value(req)?)
            .await?;
        Ok(response.message)
    }

    /// Authenticate and persist the credential and profile in the session.
    pub async fn login(&self, req: &LoginRequest) -> AppResult<User> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: LoginResponse = self
            .send_json(Method::POST, "/auth/login", serde_json::to_value(req)?)
            .await?;

        self.session()
            .store(response.token, response.user.clone())?;
        info!(username = %response.user.username, "Logged in");
        Ok(response.user)
    }

    /// Tear the session down locally. The token is stateless on the server
    /// side; there is no revocation endpoint.
    pub fn logout(&self) -> AppResult<()> {
        self.session().clear()?;
        info!("Logged out");
        Ok(())
    }
}
