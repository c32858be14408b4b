//! Share link value object.

use serde::{Deserialize, Serialize};

use nebula_core::types::FileId;

use super::mode::ShareMode;

/// A server-issued shareable link.
///
/// The URL is opaque: the client displays and copies it but never parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLink {
    /// The file the link grants access to.
    pub file_id: FileId,
    /// Link lifetime mode.
    pub mode: ShareMode,
    /// The opaque URL.
    pub url: String,
}
