//! Download output configuration.

use serde::{Deserialize, Serialize};

/// Settings for where downloaded files and archives are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Directory that downloads are saved into.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    ".".to_string()
}
