//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the on-disk session state.
///
/// The session directory holds the two well-known state files (`token` and
/// `user.json`) that are written together on login and removed together on
/// logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory for persisted session state.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

fn default_state_dir() -> String {
    match std::env::var("HOME") {
        Ok(home) => format!("{home}/.nebulashare"),
        Err(_) => ".nebulashare".to_string(),
    }
}
