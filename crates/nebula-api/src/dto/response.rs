//! Response DTOs.

use serde::{Deserialize, Serialize};

use nebula_entity::user::User;

/// Generic `{message}` acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message.
    pub message: String,
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

/// Successful login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer credential.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// Successful profile update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// The updated user.
    pub user: User,
}

/// Share link creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    /// The opaque shareable URL.
    pub link: String,
}
