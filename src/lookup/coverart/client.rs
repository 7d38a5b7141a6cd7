//! Cover Art Archive HTTP client
//!
//! API: https://coverartarchive.org

use std::time::Duration;

use crate::lookup::domain::LookupError;
use crate::lookup::musicbrainz::USER_AGENT;

/// Downloaded cover art
#[derive(Debug, Clone)]
pub struct CoverImage {
    /// Image data as served (usually JPEG)
    pub data: Vec<u8>,
    /// MIME type from the Content-Type header
    pub mime_type: String,
    /// Source URL
    pub url: String,
}

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    /// Create a client against the given archive root
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        // The front endpoint answers with a redirect to the actual image;
        // reqwest's default policy follows it.
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

    fn front_url(&self, release_id: &str) -> String {
        format!("{}/release/{}/front", self.base_url, release_id)
    }

    /// Get the front cover for a MusicBrainz release
    pub async fn get_front_cover(&self, release_id: &str) -> Result<CoverImage, LookupError> {
        let url = self.front_url(release_id);
        tracing::debug!("Cover Art Archive fetch: {}", url);
        self.download_image(&url).await
    }

    /// Download an image from a URL
    async fn download_image(&self, url: &str) -> Result<CoverImage, LookupError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NoMatches);
        }

        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?
            .to_vec();

        if data.is_empty() {
            return Err(LookupError::NoMatches);
        }

        Ok(CoverImage {
            data,
            mime_type,
            url: url.to_string(),
        })
    }
}
