//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks below.

use async_trait::async_trait;

use super::coverart::{CoverArtClient, CoverImage};
use super::domain::{LookupError, SearchQuery};
use super::musicbrainz::MusicBrainzClient;

/// Trait for the MusicBrainz recording search.
#[async_trait]
pub trait MusicBrainzApi: Send + Sync {
    /// Return the release ID of the best recording match.
    async fn find_release_id(&self, query: &SearchQuery) -> Result<String, LookupError>;
}

/// Trait for Cover Art Archive lookup.
#[async_trait]
pub trait CoverArtApi: Send + Sync {
    /// Get the front cover for a release.
    async fn get_front_cover(&self, release_id: &str) -> Result<CoverImage, LookupError>;
}

#[async_trait]
impl MusicBrainzApi for MusicBrainzClient {
    async fn find_release_id(&self, query: &SearchQuery) -> Result<String, LookupError> {
        self.find_release_id(query).await
    }
}

#[async_trait]
impl CoverArtApi for CoverArtClient {
    async fn get_front_cover(&self, release_id: &str) -> Result<CoverImage, LookupError> {
        self.get_front_cover(release_id).await
    }
}
