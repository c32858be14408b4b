//! Admin console CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;
use nebula_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all users
    Users,
    /// List all stored files across users
    Files,
    /// Delete a user and their files
    DeleteUser {
        /// User id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Role
    role: String,
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;

    match &args.command {
        AdminCommand::Users => {
            let users = api.list_all_users().await?;
            let rows: Vec<UserRow> = users
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    email: u.email.clone(),
                    role: u.role.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        AdminCommand::Files => {
            let files = api.list_all_files().await?;
            let rows: Vec<super::files::FileRow> =
                files.iter().map(super::files::FileRow::from).collect();
            output::print_list(&rows, format);
        }
        AdminCommand::DeleteUser { id, yes } => {
            let id = UserId::from(id.as_str());
            if !yes
                && !super::confirm(&format!(
                    "Delete user '{id}' and all their files? This cannot be undone."
                ))?
            {
                return Ok(());
            }
            let message = api.delete_user(&id).await?;
            output::print_success(&message);
        }
    }

    Ok(())
}
