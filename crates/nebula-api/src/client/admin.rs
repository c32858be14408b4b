//! Admin console operations.
//!
//! The server enforces the role; a non-admin credential surfaces as
//! `Unauthorized` like any other rejected request.

use reqwest::Method;
use tracing::info;

use nebula_core::result::AppResult;
use nebula_core::types::UserId;
use nebula_entity::file::FileRecord;
use nebula_entity::user::User;

use crate::dto::response::MessageResponse;

use super::ApiClient;

impl ApiClient {
    /// List every registered user.
    pub async fn list_all_users(&self) -> AppResult<Vec<User>> {
        self.get_json("/admin/users").await
    }

    /// Delete a user account and their files.
    pub async fn delete_user(&self, id: &UserId) -> AppResult<String> {
        let response = self
            .request(Method::DELETE, &format!("/admin/users/{id}"), None)
            .await?;
        let body: MessageResponse = Self::decode(response).await?;
        info!(user_id = %id, "Deleted user");
        Ok(body.message)
    }

    /// List every stored file across all users.
    pub async fn list_all_files(&self) -> AppResult<Vec<FileRecord>> {
        self.get_json("/admin/files").await
    }
}
