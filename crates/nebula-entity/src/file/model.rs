//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nebula_core::types::FileId;

/// Metadata describing one stored file.
///
/// The backend owns the record; the client holds an immutable snapshot per
/// listing fetch. Display names are not guaranteed unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
    /// Shareable link, if one has been issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable_link: Option<String>,
}

impl FileRecord {
    /// Case-insensitive name filter, as applied to the visible listing.
    pub fn matches(&self, filter: &str) -> bool {
        self.file_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}
