//! Bulk archive configuration.

use serde::{Deserialize, Serialize};

/// Settings for bulk ZIP downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Partial-failure policy: `"best-effort"` or `"all-or-nothing"`.
    #[serde(default = "default_policy")]
    pub policy: String,
    /// File name of the produced archive.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            file_name: default_file_name(),
        }
    }
}

fn default_policy() -> String {
    "best-effort".to_string()
}

fn default_file_name() -> String {
    "NebulaShare_Archive.zip".to_string()
}
