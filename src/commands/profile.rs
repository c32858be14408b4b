//! Profile management CLI commands.

use clap::{Args, Subcommand};

use nebula_api::dto::request::{ChangePasswordRequest, UpdateProfileRequest};
use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the current profile
    Show,
    /// Update username and email
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Change the account password
    ChangePassword,
}

/// Execute profile commands
pub async fn execute(
    args: &ProfileArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (session, api) = super::build_client(config)?;

    match &args.command {
        ProfileCommand::Show => {
            let user = api.profile().await?;
            output::print_item(&user, format);
        }
        ProfileCommand::Update { username, email } => {
            // Unspecified fields keep their cached values.
            let cached = session
                .user()
                .ok_or_else(|| AppError::session("Not logged in"))?;
            let req = UpdateProfileRequest {
                username: username.clone().unwrap_or(cached.username),
                email: email.clone().unwrap_or(cached.email),
            };

            let user = api.update_profile(&req).await?;
            output::print_success(&format!("Profile updated: {} <{}>", user.username, user.email));
        }
        ProfileCommand::ChangePassword => {
            let current_password = super::prompt_password("Current password", false)?;
            let new_password = super::prompt_password("New password", true)?;

            let message = api
                .change_password(&ChangePasswordRequest {
                    current_password,
                    new_password,
                })
                .await?;
            output::print_success(&message);
        }
    }

    Ok(())
}
