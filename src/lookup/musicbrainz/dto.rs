//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz search API returns, trimmed to the
//! fields we read. DO NOT use these types outside the musicbrainz module.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search

use serde::{Deserialize, Serialize};

/// Recording search response (`/ws/2/recording/?query=...&fmt=json`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingSearchResponse {
    /// Total number of hits on the server
    pub count: Option<u64>,
    /// Hits, best match first
    #[serde(default)]
    pub recordings: Vec<RecordingHit>,
}

/// One recording in the search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingHit {
    /// MusicBrainz recording ID
    pub id: String,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Recording title
    pub title: Option<String>,
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<ReleaseRef>,
}

/// Release (album/single/EP) referenced by a recording
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseRef {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: Option<String>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

impl RecordingSearchResponse {
    /// First release of the first recording, if any
    pub fn first_release_id(&self) -> Option<&str> {
        self.recordings
            .first()
            .and_then(|r| r.releases.first())
            .map(|r| r.id.as_str())
    }
}

// ============================================================================
// CONTRACT TESTS
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
