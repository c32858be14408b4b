//! The set of files currently selected for a bulk operation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::id::FileId;

/// A set of selected file identifiers.
///
/// Membership only — there are no ordering semantics. The set moves between
/// two states: empty and non-empty. It becomes non-empty on the first add
/// and returns to empty on an explicit clear or when a bulk operation
/// completes successfully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<FileId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of selected files.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the given file is selected.
    pub fn contains(&self, id: &FileId) -> bool {
        self.ids.contains(id)
    }

    /// Add a file to the selection. Returns `true` if it was newly added.
    pub fn insert(&mut self, id: FileId) -> bool {
        self.ids.insert(id)
    }

    /// Remove a file from the selection. Returns `true` if it was present.
    pub fn remove(&mut self, id: &FileId) -> bool {
        self.ids.remove(id)
    }

    /// Flip the membership of a single file.
    pub fn toggle(&mut self, id: FileId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Clear the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Toggle selection of everything currently visible.
    ///
    /// If every visible file is already selected, exactly the visible files
    /// are deselected (selections outside the visible set are kept).
    /// Otherwise all visible files are added to the selection. Calling this
    /// twice with an unchanged visible set restores the prior state.
    pub fn select_all_visible(&mut self, visible: &[FileId]) {
        let all_selected =
            !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id));
        if all_selected {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            for id in visible {
                self.ids.insert(id.clone());
            }
        }
    }

    /// Iterate over the selected identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &FileId> {
        self.ids.iter()
    }

    /// Collect the selected identifiers into a vector.
    pub fn to_vec(&self) -> Vec<FileId> {
        self.ids.iter().cloned().collect()
    }
}
