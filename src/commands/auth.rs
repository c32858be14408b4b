//! Account lifecycle CLI commands.

use clap::Args;

use nebula_api::dto::request::{LoginRequest, SignupRequest, VerifyOtpRequest};
use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;

use crate::output;

/// Arguments for account signup
#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Username (prompted if omitted)
    #[arg(long)]
    pub username: Option<String>,

    /// Email address (prompted if omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for OTP verification
#[derive(Debug, Args)]
pub struct VerifyOtpArgs {
    /// Email address the OTP was sent to (prompted if omitted)
    #[arg(long)]
    pub email: Option<String>,

    /// The OTP code (prompted if omitted)
    #[arg(long)]
    pub otp: Option<String>,
}

/// Arguments for login
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address (prompted if omitted)
    #[arg(long)]
    pub email: Option<String>,
}

/// Register a new account
pub async fn signup(args: &SignupArgs, config: &ClientConfig) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;

    let username = match &args.username {
        Some(u) => u.clone(),
        None => super::prompt_input("Username")?,
    };
    let email = match &args.email {
        Some(e) => e.clone(),
        None => super::prompt_input("Email")?,
    };
    let password = super::prompt_password("Password", true)?;

    let message = api
        .signup(&SignupRequest {
            username,
            email,
            password,
        })
        .await?;
    output::print_success(&message);
    Ok(())
}

/// Verify the OTP emailed during signup
pub async fn verify_otp(args: &VerifyOtpArgs, config: &ClientConfig) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;

    let email = match &args.email {
        Some(e) => e.clone(),
        None => super::prompt_input("Email")?,
    };
    let otp = match &args.otp {
        Some(o) => o.clone(),
        None => super::prompt_input("OTP code")?,
    };

    let message = api.verify_otp(&VerifyOtpRequest { email, otp }).await?;
    output::print_success(&message);
    Ok(())
}

/// Log in and persist the session
pub async fn login(args: &LoginArgs, config: &ClientConfig) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;

    let email = match &args.email {
        Some(e) => e.clone(),
        None => super::prompt_input("Email")?,
    };
    let password = super::prompt_password("Password", false)?;

    let user = api.login(&LoginRequest { email, password }).await?;
    output::print_success(&format!("Logged in as {} ({})", user.username, user.role));
    Ok(())
}

/// Log out, clearing the persisted session
pub fn logout(config: &ClientConfig) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;
    api.logout()?;
    output::print_success("Logged out");
    Ok(())
}

/// Show the logged-in identity from the session cache
pub fn whoami(config: &ClientConfig) -> Result<(), AppError> {
    let (session, _api) = super::build_client(config)?;

    let user = session
        .user()
        .ok_or_else(|| AppError::session("Not logged in"))?;
    output::print_kv("Username", &user.username);
    output::print_kv("Email", &user.email);
    output::print_kv("Role", user.role.as_str());
    Ok(())
}
