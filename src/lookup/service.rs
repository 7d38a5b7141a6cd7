//! Two-step remote artwork lookup
//!
//! 1. Search MusicBrainz recordings, take the first release ID
//! 2. Fetch that release's front cover from the Cover Art Archive
//!
//! The cover fetch only happens when the search produced a release ID.

use crate::config::Config;
use crate::lookup::{
    coverart::CoverArtClient,
    domain::{LookupError, SearchQuery},
    musicbrainz::MusicBrainzClient,
    traits::{CoverArtApi, MusicBrainzApi},
};

/// Cover bytes downloaded for a release
#[derive(Debug, Clone)]
pub struct RemoteCover {
    pub release_id: String,
    pub data: Vec<u8>,
}

/// MusicBrainz + Cover Art Archive lookup chain
pub struct ArtworkLookup {
    musicbrainz: Box<dyn MusicBrainzApi>,
    coverart: Box<dyn CoverArtApi>,
}

impl ArtworkLookup {
    /// Build a lookup from arbitrary client implementations
    pub fn new(musicbrainz: Box<dyn MusicBrainzApi>, coverart: Box<dyn CoverArtApi>) -> Self {
        Self {
            musicbrainz,
            coverart,
        }
    }

    /// Build a lookup talking to the real services
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Ok(Self::new(
            Box::new(MusicBrainzClient::new(
                config.musicbrainz_url.clone(),
                config.http_timeout,
            )?),
            Box::new(CoverArtClient::new(
                config.coverart_url.clone(),
                config.http_timeout,
            )?),
        ))
    }

    /// Find cover art for a recording
    pub async fn find_cover(&self, query: &SearchQuery) -> Result<RemoteCover, LookupError> {
        if query.is_empty() {
            return Err(LookupError::InvalidQuery);
        }

        println!("  Searching MusicBrainz...");
        let release_id = match self.musicbrainz.find_release_id(query).await {
            Ok(id) => id,
            Err(e) => {
                if !matches!(e, LookupError::NoMatches) {
                    println!("  MusicBrainz error: {}", e);
                }
                println!("  No recording found");
                return Err(e);
            }
        };

        println!("  Found release, fetching cover art...");
        match self.coverart.get_front_cover(&release_id).await {
            Ok(cover) => {
                tracing::debug!(
                    "Downloaded {} bytes ({}) from {}",
                    cover.data.len(),
                    cover.mime_type,
                    cover.url
                );
                Ok(RemoteCover {
                    release_id,
                    data: cover.data,
                })
            }
            Err(e) => {
                if !matches!(e, LookupError::NoMatches) {
                    println!("  Cover Art Archive error: {}", e);
                }
                println!("  No cover art available");
                Err(e)
            }
        }
    }
}
