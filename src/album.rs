//! Album-name editing across a folder.
//!
//! The same value goes to every matched file. Passing no value clears the
//! album tag outright.

use std::path::Path;

use crate::apply::{FileOutcome, RunSummary};
use crate::config::Config;
use crate::error::Result;
use crate::metadata;
use crate::scanner::{FolderJob, display_name};

/// Set (or with `None`, remove) the album tag on every matched file.
///
/// Fails only when the folder itself is unusable; per-file errors are
/// reported and counted.
pub fn update_album(folder: &Path, album: Option<&str>, config: &Config) -> Result<RunSummary> {
    let job = FolderJob::scan(folder, config)?;

    let outcomes: Vec<FileOutcome> = job
        .files
        .iter()
        .map(|file| match metadata::set_album(file, album) {
            Ok(()) => {
                println!("✓ {}", display_name(file));
                FileOutcome::Written
            }
            Err(e) => {
                println!("✗ {}: {}", display_name(file), e);
                tracing::debug!("Album update failed for {:?}: {}", file, e);
                FileOutcome::Failed {
                    file: file.clone(),
                    reason: e.to_string(),
                }
            }
        })
        .collect();

    Ok(outcomes.iter().collect())
}
