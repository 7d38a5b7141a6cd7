//! Internal domain models for remote artwork lookup.
//!
//! These types don't change when the external APIs change.

use std::fmt;

/// What to search for on MusicBrainz.
///
/// Blank values are dropped on construction, so a query never carries an
/// empty title or artist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<String>, artist: Option<String>) -> Self {
        Self {
            title: non_blank(title),
            artist: non_blank(artist),
        }
    }

    /// Build a query from a file stem in the "Title - Artist" layout.
    ///
    /// Splits on the first `" - "`; without a separator the whole stem is
    /// used as the title.
    pub fn from_file_stem(stem: &str) -> Self {
        match stem.split_once(" - ") {
            Some((title, artist)) => Self::new(
                Some(title.trim().to_string()),
                Some(artist.trim().to_string()),
            ),
            None => Self::new(Some(stem.to_string()), None),
        }
    }

    /// True when there is nothing to search for
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none()
    }

    /// Lucene query string for the recording search endpoint.
    ///
    /// Returns None for an empty query.
    pub fn to_lucene(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if let Some(title) = &self.title {
            parts.push(format!("recording:\"{}\"", escape_phrase(title)));
        }
        if let Some(artist) = &self.artist {
            parts.push(format!("artist:\"{}\"", escape_phrase(artist)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" AND "))
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.title, &self.artist) {
            (Some(title), Some(artist)) => write!(f, "{} by {}", title, artist),
            (Some(title), None) => write!(f, "{}", title),
            (None, Some(artist)) => write!(f, "(unknown title) by {}", artist),
            (None, None) => write!(f, "(nothing)"),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// Quotes inside a phrase would end it early
fn escape_phrase(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Errors that can occur during remote lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Nothing to search for")]
    InvalidQuery,
}
