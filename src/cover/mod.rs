//! Cover art resolution.
//!
//! Artwork for a folder or a single track comes from the first source in an
//! ordered chain that produces bytes:
//!
//! 1. **Local file** - `cover.jpg` staged in the folder (folder mode only)
//! 2. **Remote fetch** - MusicBrainz + Cover Art Archive
//! 3. **Placeholder** - a flat grey square, always available
//!
//! Whatever wins is normalized (RGB, bounded size, JPEG) before embedding.

mod normalize;
mod resolver;
mod sidecar;

pub use normalize::{normalize, placeholder};
pub use resolver::{CoverResolver, folder_query, track_query};
pub use sidecar::load_local_cover;

use std::path::PathBuf;

/// Where a piece of artwork came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Staged cover file inside the folder
    Local(PathBuf),
    /// Cover Art Archive image for a MusicBrainz release
    Remote { release_id: String },
    /// Generated placeholder
    Generated,
}

/// Normalized artwork ready to embed
#[derive(Debug, Clone)]
pub struct Artwork {
    /// JPEG bytes
    pub data: Vec<u8>,
    pub source: Provenance,
    /// Staged cover file the chain consumed, even if it failed to decode
    pub staged: Option<PathBuf>,
}

impl Artwork {
    pub fn is_placeholder(&self) -> bool {
        self.source == Provenance::Generated
    }

    /// Staged cover file to remove once every file has taken the artwork
    pub fn staged_cover(&self) -> Option<&PathBuf> {
        self.staged.as_ref()
    }
}
