//! Share mode enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long a shareable link stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareMode {
    /// The link stays valid until the file is deleted.
    #[serde(rename = "PERMANENT")]
    Permanent,
    /// The link is consumed by its first use.
    #[serde(rename = "ONE_TIME")]
    OneTime,
}

impl ShareMode {
    /// Return the mode as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "PERMANENT",
            Self::OneTime => "ONE_TIME",
        }
    }
}

impl fmt::Display for ShareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareMode {
    type Err = nebula_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "PERMANENT" => Ok(Self::Permanent),
            "ONE_TIME" => Ok(Self::OneTime),
            _ => Err(nebula_core::AppError::validation(format!(
                "Invalid share mode: '{s}'. Expected 'permanent' or 'one-time'"
            ))),
        }
    }
}
