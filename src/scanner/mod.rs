//! Folder scanning.
//!
//! Lists the audio files directly inside one folder (no recursion) whose
//! extension matches the configured set, sorted by file name.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};

/// The matched audio files of one folder
#[derive(Debug, Clone)]
pub struct FolderJob {
    pub folder: PathBuf,
    pub files: Vec<PathBuf>,
}

impl FolderJob {
    /// Scan `folder` for matching audio files.
    ///
    /// Fails with [`Error::NotADirectory`] when the folder doesn't exist.
    pub fn scan(folder: &Path, config: &Config) -> Result<Self> {
        if !folder.is_dir() {
            return Err(Error::NotADirectory(folder.to_path_buf()));
        }

        let files = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| config.matches_extension(e.path()))
            .map(|e| e.into_path())
            .collect();

        Ok(Self {
            folder: folder.to_path_buf(),
            files,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The folder's own name, used as a fallback search term and album name
    pub fn folder_name(&self) -> Option<String> {
        folder_name(&self.folder)
    }
}

/// Last component of a folder path.
///
/// Resolves `.` and trailing separators through the filesystem when needed.
pub fn folder_name(folder: &Path) -> Option<String> {
    match folder.file_name() {
        Some(name) => Some(name.to_string_lossy().into_owned()),
        // "." and ".." have no file_name
        None => folder
            .canonicalize()
            .ok()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
    }
}

/// File name for progress output
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
