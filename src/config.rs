//! Runtime configuration.
//!
//! There is no config file: every setting has a default matching the
//! behaviour operators expect, and the binaries override individual values
//! from command-line flags.

use std::path::Path;
use std::time::Duration;

/// Default MusicBrainz web service root
pub const MUSICBRAINZ_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Default Cover Art Archive root
pub const COVERART_BASE_URL: &str = "https://coverartarchive.org";

/// Settings shared by the artwork and album commands
#[derive(Debug, Clone)]
pub struct Config {
    /// Longest edge of embedded artwork, in pixels
    pub max_size: u32,

    /// JPEG quality (1-100) for normalized and generated artwork
    pub jpeg_quality: u8,

    /// Pause after each file in per-file mode (MusicBrainz allows ~1 req/sec)
    pub request_delay: Duration,

    /// Timeout applied to every HTTP request
    pub http_timeout: Duration,

    /// Audio file extensions to match, lowercase, without the dot
    pub extensions: Vec<String>,

    /// Name of the staged cover image looked up inside each folder
    pub cover_filename: String,

    /// MusicBrainz web service root
    pub musicbrainz_url: String,

    /// Cover Art Archive root
    pub coverart_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 512,
            jpeg_quality: 95,
            request_delay: Duration::from_millis(1100),
            http_timeout: Duration::from_secs(10),
            extensions: vec!["m4a".to_string()],
            cover_filename: "cover.jpg".to_string(),
            musicbrainz_url: MUSICBRAINZ_BASE_URL.to_string(),
            coverart_url: COVERART_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Replace the matched extensions, normalizing case and leading dots.
    ///
    /// An empty list keeps the current extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        if !exts.is_empty() {
            self.extensions = exts;
        }
        self
    }

    /// Check whether a path has one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
            .unwrap_or(false)
    }
}
