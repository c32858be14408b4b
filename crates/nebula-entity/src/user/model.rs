//! User entity model.

use serde::{Deserialize, Serialize};

use nebula_core::types::UserId;

use super::role::UserRole;

/// A registered user, as served by the backend and cached locally alongside
/// the session credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
