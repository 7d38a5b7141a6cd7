//! MusicBrainz API integration
//!
//! Finds the release a recording appears on, so its cover can be fetched
//! from the Cover Art Archive.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod client;

pub use client::MusicBrainzClient;
pub(crate) use client::USER_AGENT;
