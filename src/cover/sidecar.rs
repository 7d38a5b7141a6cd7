//! Staged cover file in the target folder.
//!
//! Operators drop a `cover.jpg` next to the tracks to force specific art.
//! Its bytes are read as-is; decoding happens later during normalization.

use std::path::{Path, PathBuf};

/// Read the staged cover file from `folder`, if present.
///
/// A file that exists but can't be read is reported and treated as absent,
/// and so is an empty one.
pub fn load_local_cover(folder: &Path, filename: &str) -> Option<(PathBuf, Vec<u8>)> {
    let cover_path = folder.join(filename);
    if !cover_path.is_file() {
        return None;
    }

    match std::fs::read(&cover_path) {
        Ok(data) if data.is_empty() => None,
        Ok(data) => Some((cover_path, data)),
        Err(e) => {
            println!("  Failed to read {}: {}", filename, e);
            tracing::warn!("Failed to read {:?}: {}", cover_path, e);
            None
        }
    }
}
