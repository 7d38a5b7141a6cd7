//! Album Tagger - embed album artwork and edit album tags in bulk.
//!
//! Artwork comes from a staged `cover.jpg`, a MusicBrainz / Cover Art
//! Archive lookup, or a generated placeholder, and is normalized to a
//! bounded JPEG before being written into each file's tag.

pub mod album;
pub mod apply;
pub mod cli;
pub mod config;
pub mod cover;
pub mod error;
pub mod lookup;
pub mod metadata;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;
