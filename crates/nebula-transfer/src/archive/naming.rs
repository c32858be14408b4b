//! Deterministic archive entry naming.

use std::collections::HashSet;

/// Pick an entry name for a display name, disambiguating collisions.
///
/// The first occupant keeps the plain name; later collisions get an index
/// suffix before the extension (`dup.txt`, `dup_1.txt`, `dup_2.txt`).
/// Deterministic in insertion order; an entry is never overwritten.
pub fn unique_entry_name(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }

    let (stem, extension) = split_name(name);
    let mut index = 1usize;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{stem}_{index}.{ext}"),
            None => format!("{stem}_{index}"),
        };
        if !taken.contains(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Split a display name at its last dot. A leading dot (`.bashrc`) is part
/// of the stem, not an extension marker.
fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}
