//! Remote artwork lookup - finds a release on MusicBrainz and downloads its
//! front cover from the Cover Art Archive.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - search query and error types
//! - **API DTOs** (`musicbrainz/dto.rs`) - exact API response shapes
//! - **Clients** - HTTP clients for the two services
//! - **Traits** (`traits.rs`) - seams for substituting mock clients in tests
//! - **Service** (`service.rs`) - the two-step lookup chain
//!
//! # Usage
//!
//! ```ignore
//! use album_tagger::lookup::{ArtworkLookup, SearchQuery};
//!
//! let lookup = ArtworkLookup::from_config(&config)?;
//! let query = SearchQuery::new(Some("Paranoid".into()), Some("Black Sabbath".into()));
//! let cover = lookup.find_cover(&query).await?;
//! println!("{} bytes from release {}", cover.data.len(), cover.release_id);
//! ```

pub mod coverart;
pub mod domain;
pub mod musicbrainz;
pub mod service;
pub mod traits;

pub use coverart::{CoverArtClient, CoverImage};
pub use domain::{LookupError, SearchQuery};
pub use musicbrainz::MusicBrainzClient;
pub use service::{ArtworkLookup, RemoteCover};
pub use traits::{CoverArtApi, MusicBrainzApi};
