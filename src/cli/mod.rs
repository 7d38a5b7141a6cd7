//! Command-line interface for album-tagger.
//!
//! Two independent entry points share this module:
//! - `album-art`: embed cover artwork
//! - `album-meta`: set or remove the album tag

mod commands;

pub use commands::{ArtCli, MetaCli, MetaCommand, init_logging, parse_or_exit, run_art, run_meta};
