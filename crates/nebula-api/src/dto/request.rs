//! Request DTOs with validation.
//!
//! Outbound bodies are validated before hitting the wire so obvious
//! mistakes fail locally instead of as a server round-trip.

use serde::{Deserialize, Serialize};
use validator::Validate;

use nebula_entity::share::ShareMode;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// OTP verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Email address the OTP was sent to.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// The one-time code.
    #[validate(length(min = 1, message = "OTP code is required"))]
    pub otp: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// New email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
}

/// Share link creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    /// Link lifetime mode.
    #[serde(rename = "type")]
    pub mode: ShareMode,
}
