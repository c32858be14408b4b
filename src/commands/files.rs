//! File operation CLI commands.

use std::path::PathBuf;

use bytes::Bytes;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;
use nebula_core::types::FileId;
use nebula_entity::file::FileRecord;
use nebula_entity::share::ShareMode;
use nebula_transfer::BlobStore;

use crate::output::{self, OutputFormat};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FilesCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// List your files
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Upload a file
    Upload {
        /// Path of the file to upload
        path: PathBuf,
    },
    /// Download a file by id
    Download {
        /// File id
        id: String,
        /// Directory to save into (defaults to the configured directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a file by id
    Delete {
        /// File id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Create a shareable link
    Share {
        /// File id
        id: String,
        /// Link lifetime: permanent or one-time
        #[arg(short, long, default_value = "permanent")]
        mode: String,
    },
}

/// File display row for table output
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct FileRow {
    /// File ID
    id: String,
    /// Display name
    name: String,
    /// MIME type
    mime: String,
    /// Size
    size: String,
    /// Created at
    created: String,
}

impl From<&FileRecord> for FileRow {
    fn from(r: &FileRecord) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.file_name.clone(),
            mime: r.file_type.clone(),
            size: output::human_size(r.file_size),
            created: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Find a record in the listing by id.
fn find_record<'a>(listing: &'a [FileRecord], id: &FileId) -> Result<&'a FileRecord, AppError> {
    listing
        .iter()
        .find(|r| &r.id == id)
        .ok_or_else(|| AppError::not_found(format!("No file with id '{id}' in your listing")))
}

/// Execute file commands
pub async fn execute(
    args: &FilesArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;

    match &args.command {
        FilesCommand::List { filter } => {
            let listing = api.list_files().await?;
            let rows: Vec<FileRow> = listing
                .iter()
                .filter(|r| filter.as_deref().is_none_or(|f| r.matches(f)))
                .map(FileRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        FilesCommand::Upload { path } => {
            let record = api.upload(path).await?;
            output::print_success(&format!(
                "Uploaded {} ({}) as {}",
                record.file_name,
                output::human_size(record.file_size),
                record.id
            ));
        }
        FilesCommand::Download { id, output } => {
            let id = FileId::from(id.as_str());
            let listing = api.list_files().await?;
            let record = find_record(&listing, &id)?;

            let fetched = api.download(&id).await?;
            let dir = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.download.directory));
            let dest = dir.join(&record.file_name);

            // Same scoped-handle discipline as the bulk flow: release
            // immediately after the save is dispatched.
            let blobs = BlobStore::new();
            let handle = blobs.materialize(Bytes::clone(&fetched.data), fetched.content_type);
            let save_result = blobs.save_to(handle, &dest).await;
            blobs.release(handle);
            let bytes_written = save_result?;

            output::print_success(&format!(
                "Saved {} ({})",
                dest.display(),
                output::human_size(bytes_written)
            ));
        }
        FilesCommand::Delete { id, yes } => {
            let id = FileId::from(id.as_str());
            if !yes && !super::confirm(&format!("Delete file '{id}'? This cannot be undone."))? {
                return Ok(());
            }
            let message = api.delete_file(&id).await?;
            output::print_success(&message);
        }
        FilesCommand::Share { id, mode } => {
            let id = FileId::from(id.as_str());
            let mode: ShareMode = mode.parse()?;
            let link = api.share_file(&id, mode).await?;
            output::print_kv("Link", &link.url);
            output::print_success(&format!("Shareable link created ({mode})"));
        }
    }

    Ok(())
}
