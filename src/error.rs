//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! binaries use `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error enum for tag, image and filesystem work
//! - [`LookupError`](crate::lookup::LookupError): remote lookup failures,
//!   which the resolver recovers from with the placeholder

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag reading/writing error
    #[error("Metadata error for {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Image decode/encode error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Target folder does not exist or is not a directory
    #[error("{0} is not a valid directory")]
    NotADirectory(PathBuf),
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_display() {
        let err = Error::NotADirectory(PathBuf::from("/music/missing"));
        assert_eq!(err.to_string(), "/music/missing is not a valid directory");
    }

    #[test]
    fn test_metadata_error() {
        let err = Error::metadata("/music/song.m4a", "unsupported format");
        let msg = err.to_string();
        assert!(msg.contains("song.m4a"));
        assert!(msg.contains("unsupported format"));
    }
}
