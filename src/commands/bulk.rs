//! Bulk operation CLI commands.
//!
//! A bulk command builds a selection against the current listing: `--ids`
//! selects explicit files, `--all` applies the select-all toggle to the
//! visible set (the listing, narrowed by `--filter`). Each outcome is
//! reported as a single notification.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use tokio_util::sync::CancellationToken;

use nebula_core::config::ClientConfig;
use nebula_core::error::AppError;
use nebula_core::types::FileId;
use nebula_entity::file::FileRecord;
use nebula_transfer::{ArchiveBuilder, ArchivePolicy, BlobStore, BulkCoordinator, JobStatus};

use crate::output::{self, OutputFormat};

/// Arguments for bulk commands
#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Bulk subcommand
    #[command(subcommand)]
    pub command: BulkCommand,
}

/// Selection flags shared by bulk subcommands
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Comma-separated file ids to select
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Select all visible files
    #[arg(long)]
    pub all: bool,

    /// Case-insensitive name filter defining the visible set
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Bulk subcommands
#[derive(Debug, Subcommand)]
pub enum BulkCommand {
    /// Download the selection as one ZIP archive
    Download {
        /// Selection flags
        #[command(flatten)]
        selection: SelectionArgs,

        /// Directory to save the archive into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Partial-failure policy: best-effort or all-or-nothing
        #[arg(long)]
        policy: Option<String>,
    },
    /// Delete the selection
    Delete {
        /// Selection flags
        #[command(flatten)]
        selection: SelectionArgs,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Apply selection flags against a listing snapshot.
fn build_selection(
    coordinator: &mut BulkCoordinator,
    listing: &[FileRecord],
    args: &SelectionArgs,
) -> Result<(), AppError> {
    let visible: Vec<&FileRecord> = listing
        .iter()
        .filter(|r| args.filter.as_deref().is_none_or(|f| r.matches(f)))
        .collect();

    for raw in &args.ids {
        let id = FileId::from(raw.as_str());
        if !listing.iter().any(|r| r.id == id) {
            return Err(AppError::not_found(format!(
                "No file with id '{id}' in your listing"
            )));
        }
        coordinator.toggle(id);
    }

    if args.all {
        let visible_ids: Vec<FileId> = visible.iter().map(|r| r.id.clone()).collect();
        coordinator.select_all_visible(&visible_ids);
    }

    if coordinator.selection().is_empty() {
        return Err(AppError::validation(
            "Nothing selected; pass --ids or --all",
        ));
    }
    Ok(())
}

/// Execute bulk commands
pub async fn execute(
    args: &BulkArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_session, api) = super::build_client(config)?;
    let listing = api.list_files().await?;
    let mut coordinator = BulkCoordinator::new();

    match &args.command {
        BulkCommand::Download {
            selection,
            output: output_dir,
            policy,
        } => {
            build_selection(&mut coordinator, &listing, selection)?;
            let selected = coordinator.selection().len();

            let policy: ArchivePolicy = policy
                .as_deref()
                .unwrap_or(&config.archive.policy)
                .parse()?;
            let builder = ArchiveBuilder::new(Arc::new(api.clone()), policy);
            let blobs = BlobStore::new();

            let dir = output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.download.directory));
            let dest = dir.join(&config.archive.file_name);

            // Abort outstanding fetches if the user interrupts.
            let cancel = CancellationToken::new();
            let interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    interrupt.cancel();
                }
            });

            let report = coordinator
                .download_selected(&listing, &builder, &blobs, &dest, &cancel)
                .await?;

            if format == OutputFormat::Json {
                output::print_item(&report, format);
                return Ok(());
            }

            match report.status {
                JobStatus::Complete => output::print_success(&format!(
                    "Archive saved to {} ({} files, {})",
                    report.path.display(),
                    report.entries.len(),
                    output::human_size(report.bytes_written)
                )),
                _ => {
                    let failed: Vec<String> =
                        report.failed.iter().map(|id| id.to_string()).collect();
                    output::print_warning(&format!(
                        "Archive saved to {} with {} of {} files; failed: {}",
                        report.path.display(),
                        report.entries.len(),
                        selected,
                        failed.join(", ")
                    ));
                }
            }
        }
        BulkCommand::Delete { selection, yes } => {
            build_selection(&mut coordinator, &listing, selection)?;
            let selected = coordinator.selection().len();

            if !yes
                && !super::confirm(&format!(
                    "Delete {selected} file(s)? This cannot be undone."
                ))?
            {
                return Ok(());
            }

            let report = coordinator.delete_selected(&api).await?;

            if format == OutputFormat::Json {
                output::print_item(&report, format);
                return Ok(());
            }

            if report.is_success() {
                output::print_success(&format!("{} file(s) deleted", report.deleted.len()));
            } else {
                let failed: Vec<String> =
                    report.failed.iter().map(|(id, _)| id.to_string()).collect();
                return Err(AppError::internal(format!(
                    "Bulk delete incomplete: {} of {} deleted; failed: {}",
                    report.deleted.len(),
                    selected,
                    failed.join(", ")
                )));
            }
        }
    }

    Ok(())
}
