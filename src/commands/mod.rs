//! CLI command definitions and dispatch.

pub mod admin;
pub mod auth;
pub mod bulk;
pub mod config;
pub mod files;
pub mod profile;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nebula_api::{ApiClient, Session};
use nebula_core::config::logging::LoggingConfig;
use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;

use crate::output::OutputFormat;

/// NebulaShare — file sharing from the command line
#[derive(Debug, Parser)]
#[command(name = "nebula", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account (an OTP is emailed for verification)
    Signup(auth::SignupArgs),
    /// Verify the OTP code emailed during signup
    VerifyOtp(auth::VerifyOtpArgs),
    /// Log in and persist the session
    Login(auth::LoginArgs),
    /// Log out, clearing the persisted session
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Profile management
    Profile(profile::ProfileArgs),
    /// File operations
    Files(files::FilesArgs),
    /// Bulk operations over a selection
    Bulk(bulk::BulkArgs),
    /// Admin console (requires the ADMIN role)
    Admin(admin::AdminArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = ClientConfig::load(self.config.as_deref())?;
        init_logging(&config.logging);

        match &self.command {
            Commands::Signup(args) => auth::signup(args, &config).await,
            Commands::VerifyOtp(args) => auth::verify_otp(args, &config).await,
            Commands::Login(args) => auth::login(args, &config).await,
            Commands::Logout => auth::logout(&config),
            Commands::Whoami => auth::whoami(&config),
            Commands::Profile(args) => profile::execute(args, &config, self.format).await,
            Commands::Files(args) => files::execute(args, &config, self.format).await,
            Commands::Bulk(args) => bulk::execute(args, &config, self.format).await,
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Initialize tracing from config, with `NEBULA_LOG` taking precedence.
fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_env("NEBULA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cfg.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cfg.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Helper: build the session-backed API client.
pub fn build_client(config: &ClientConfig) -> Result<(Arc<Session>, ApiClient), AppError> {
    let session = Arc::new(Session::new(&config.session));
    session.init()?;
    let api = ApiClient::new(&config.api, Arc::clone(&session))?;
    Ok((session, api))
}

/// Helper: prompt for a line of input.
pub fn prompt_input(label: &str) -> Result<String, AppError> {
    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}

/// Helper: prompt for a password, optionally with confirmation.
pub fn prompt_password(label: &str, confirm: bool) -> Result<String, AppError> {
    let mut prompt = dialoguer::Password::new().with_prompt(label);
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    prompt
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}

/// Helper: yes/no confirmation, defaulting to no.
pub fn confirm(label: &str) -> Result<bool, AppError> {
    dialoguer::Confirm::new()
        .with_prompt(label)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}
