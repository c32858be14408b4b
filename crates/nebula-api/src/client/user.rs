//! Profile operations.

use reqwest::Method;
use tracing::info;
use validator::Validate;

use nebula_core::error::AppError;
use nebula_core::result::AppResult;
use nebula_entity::user::User;

use crate::dto::request::{ChangePasswordRequest, UpdateProfileRequest};
use crate::dto::response::{MessageResponse, ProfileUpdateResponse};

use super::ApiClient;

impl ApiClient {
    /// Fetch the current profile and refresh the session cache.
    pub async fn profile(&self) -> AppResult<User> {
        let user: User = self.get_json("/user/profile").await?;
        self.session().set_user(user.clone())?;
        Ok(user)
    }

    /// Update username/email; the session cache follows the server copy.
    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> AppResult<User> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: ProfileUpdateResponse = self
            .send_json(Method::PUT, "/user/profile", serde_json::to_value(req)?)
            .await?;

        self.session().set_user(response.user.clone())?;
        info!(username = %response.user.username, "Profile updated");
        Ok(response.user)
    }

    /// Change the account password.
    pub async fn change_password(&self, req: &ChangePasswordRequest) -> AppResult<String> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let response: MessageResponse = self
            .send_json(
                Method::PUT,
                "/user/change-password",
                serde_json::to_value(req)?,
            )
            .await?;
        Ok(response.message)
    }
}
