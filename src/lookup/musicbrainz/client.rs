//! MusicBrainz HTTP client
//!
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.

use std::time::Duration;

use super::dto;
use crate::lookup::domain::{LookupError, SearchQuery};

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string - MusicBrainz requires this
pub(crate) const USER_AGENT: &str = concat!(
    "AlbumTagger/",
    env!("CARGO_PKG_VERSION"),
    " (personal use)"
);

impl MusicBrainzClient {
    /// Create a client against the given web service root
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search recordings and return the first hit's first release ID
    pub async fn find_release_id(&self, query: &SearchQuery) -> Result<String, LookupError> {
        let response = self.send_search_request(query).await?;
        response
            .first_release_id()
            .map(str::to_string)
            .ok_or(LookupError::NoMatches)
    }

    fn search_url(&self, query: &SearchQuery) -> Result<String, LookupError> {
        let lucene = query.to_lucene().ok_or(LookupError::InvalidQuery)?;
        Ok(format!(
            "{}/recording/?query={}&fmt=json&limit=1",
            self.base_url,
            urlencoding::encode(&lucene)
        ))
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        query: &SearchQuery,
    ) -> Result<dto::RecordingSearchResponse, LookupError> {
        let url = self.search_url(query)?;
        tracing::debug!("MusicBrainz search: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(LookupError::Api(error.error));
            }
            return Err(LookupError::Status(status));
        }

        response
            .json::<dto::RecordingSearchResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}
