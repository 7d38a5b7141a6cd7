//! Embeds resolved artwork into every matched file of a folder.
//!
//! Two strategies:
//! - **Shared**: resolve once for the folder, write the same bytes everywhere.
//!   A staged `cover.jpg` is deleted afterwards if every file took it.
//! - **Per-file**: resolve independently for each file, pausing between
//!   files to respect the MusicBrainz rate limit.
//!
//! A failing file never stops the folder; it becomes a
//! [`FileOutcome::Failed`] and processing moves on.

use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::cover::{Artwork, CoverResolver, track_query};
use crate::metadata;
use crate::scanner::{FolderJob, display_name};

/// Strategy for assigning artwork within a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One artwork for the whole folder
    Shared,
    /// Independent lookup per file
    PerFile,
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Cover written with resolved artwork
    Written,
    /// Cover written, but only with the placeholder because the lookup failed
    WrittenWithPlaceholder,
    /// Tag read or save failed; the file is unchanged
    Failed { file: PathBuf, reason: String },
}

impl FileOutcome {
    fn failed(file: &Path, reason: impl ToString) -> Self {
        Self::Failed {
            file: file.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this outcome counts towards "succeeded"
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Succeeded/failed counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Print the per-folder results block
    pub fn print_results(&self) {
        println!("\n--- Results ---");
        println!("Succeeded: {}", self.succeeded);
        println!("Failed: {}", self.failed);
    }
}

impl Add for RunSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            succeeded: self.succeeded + rhs.succeeded,
            failed: self.failed + rhs.failed,
        }
    }
}

impl AddAssign for RunSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> FromIterator<&'a FileOutcome> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a FileOutcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

/// Everything that happened in one folder
#[derive(Debug, Clone, Default)]
pub struct FolderReport {
    pub outcomes: Vec<FileOutcome>,
    /// Set when the staged cover file was deleted after a clean run
    pub local_cover_removed: bool,
}

impl FolderReport {
    pub fn summary(&self) -> RunSummary {
        self.outcomes.iter().collect()
    }
}

/// Tag every matched file in `folder` using the given strategy.
pub async fn apply_folder(folder: &Path, mode: Mode, resolver: &CoverResolver) -> FolderReport {
    let report = match open_job(folder, resolver.config()) {
        Some(job) => match mode {
            Mode::Shared => apply_shared(&job, resolver).await,
            Mode::PerFile => apply_per_file(&job, resolver).await,
        },
        None => FolderReport::default(),
    };
    report.summary().print_results();
    report
}

fn open_job(folder: &Path, config: &Config) -> Option<FolderJob> {
    match FolderJob::scan(folder, config) {
        Ok(job) if job.is_empty() => {
            let exts: Vec<String> = config.extensions.iter().map(|e| format!(".{}", e)).collect();
            println!("No {} files found in folder", exts.join("/"));
            None
        }
        Ok(job) => Some(job),
        Err(e) => {
            println!("Error: {}", e);
            None
        }
    }
}

/// Same artwork for every file; deletes a staged cover after a clean run.
pub async fn apply_shared(job: &FolderJob, resolver: &CoverResolver) -> FolderReport {
    let artwork = resolver.resolve_folder(job).await;
    if artwork.is_placeholder() {
        println!("Using default artwork");
    }

    let outcomes: Vec<FileOutcome> = job
        .files
        .iter()
        .map(|file| match metadata::write_cover(file, &artwork.data) {
            Ok(()) => {
                println!("✓ {}", display_name(file));
                FileOutcome::Written
            }
            Err(e) => {
                println!("✗ {}: {}", display_name(file), e);
                FileOutcome::failed(file, e)
            }
        })
        .collect();

    let mut report = FolderReport {
        outcomes,
        local_cover_removed: false,
    };
    report.local_cover_removed = remove_staged_cover(&artwork, &report.summary());
    report
}

/// Delete the staged cover file, only if it was used and every file took it.
fn remove_staged_cover(artwork: &Artwork, summary: &RunSummary) -> bool {
    let Some(cover) = artwork.staged_cover() else {
        return false;
    };
    if summary.failed > 0 || summary.succeeded == 0 {
        return false;
    }

    let name = display_name(cover);
    match std::fs::remove_file(cover) {
        Ok(()) => {
            println!("\n✓ Deleted {} (all files processed successfully)", name);
            true
        }
        Err(e) => {
            println!("\n⚠ Could not delete {}: {}", name, e);
            tracing::warn!("Failed to delete {:?}: {}", cover, e);
            false
        }
    }
}

/// Independent artwork per file, pausing after each one.
pub async fn apply_per_file(job: &FolderJob, resolver: &CoverResolver) -> FolderReport {
    let mut outcomes = Vec::with_capacity(job.files.len());

    for file in &job.files {
        outcomes.push(tag_track(file, resolver).await);

        // MusicBrainz allows about one request per second
        tokio::time::sleep(resolver.config().request_delay).await;
    }

    FolderReport {
        outcomes,
        local_cover_removed: false,
    }
}

async fn tag_track(file: &Path, resolver: &CoverResolver) -> FileOutcome {
    let name = display_name(file);

    let tags = match metadata::read(file) {
        Ok(tags) => tags,
        Err(e) => {
            println!("✗ {}: {}", name, e);
            return FileOutcome::failed(file, e);
        }
    };

    let query = track_query(file, &tags);
    println!("\n{}", name);
    println!("Searching for: {}", query);

    let artwork = resolver.resolve_track(&query).await;
    if artwork.is_placeholder() {
        println!("⚠ Using default artwork");
    }

    match metadata::write_cover(file, &artwork.data) {
        Ok(()) => {
            println!("✓ Saved");
            if artwork.is_placeholder() {
                FileOutcome::WrittenWithPlaceholder
            } else {
                FileOutcome::Written
            }
        }
        Err(e) => {
            println!("✗ {}: {}", name, e);
            FileOutcome::failed(file, e)
        }
    }
}
