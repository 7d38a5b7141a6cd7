//! Artwork embedding command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;

use crate::apply::{Mode, RunSummary, apply_folder};
use crate::config::Config;
use crate::cover::CoverResolver;
use crate::lookup::ArtworkLookup;

use super::{print_banner, runtime};

/// Literal first argument selecting shared mode
const SHARED_KEYWORD: &str = "album";

/// Embed album artwork into the audio files of one or more folders.
///
/// By default every file gets its own MusicBrainz lookup. Start with the
/// word `album` to resolve one artwork per folder instead; a `cover.jpg`
/// in the folder is then used (and removed) in place of a lookup.
#[derive(Parser, Debug)]
#[command(name = "album-art", author, version, about, long_about)]
pub struct ArtCli {
    /// Optional `album` keyword, then one or more folders
    #[arg(value_name = "[album] FOLDER", required = true, num_args = 1..)]
    pub targets: Vec<PathBuf>,

    /// Audio file extension to match (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = "m4a")]
    pub extensions: Vec<String>,

    /// Longest edge of embedded artwork in pixels
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(16..=4096))]
    pub max_size: u32,

    /// JPEG quality for embedded artwork
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Pause between per-file lookups, in milliseconds
    #[arg(long, default_value_t = 1100)]
    pub delay_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl ArtCli {
    /// Split the positional arguments into mode and folders
    pub fn plan(&self) -> anyhow::Result<(Mode, Vec<PathBuf>)> {
        let (mode, folders) = match self.targets.split_first() {
            Some((first, rest)) if first.as_os_str() == SHARED_KEYWORD => (Mode::Shared, rest),
            _ => (Mode::PerFile, self.targets.as_slice()),
        };

        if folders.is_empty() {
            bail!("at least one folder path required after '{}'", SHARED_KEYWORD);
        }
        Ok((mode, folders.to_vec()))
    }

    pub fn config(&self) -> Config {
        Config {
            max_size: self.max_size,
            jpeg_quality: self.quality,
            request_delay: Duration::from_millis(self.delay_ms),
            http_timeout: Duration::from_secs(self.timeout_secs),
            ..Config::default()
        }
        .with_extensions(&self.extensions)
    }
}

/// Process every folder and print per-folder and overall results
pub fn run_art(cli: &ArtCli) -> anyhow::Result<RunSummary> {
    let (mode, folders) = cli.plan()?;
    let config = cli.config();
    let lookup = ArtworkLookup::from_config(&config)?;
    let resolver = CoverResolver::new(lookup, config)?;

    let rt = runtime()?;
    let total = rt.block_on(async {
        let mut total = RunSummary::default();
        for (i, folder) in folders.iter().enumerate() {
            print_banner(&format!(
                "Processing folder {}/{}: {}",
                i + 1,
                folders.len(),
                folder.display()
            ));
            total += apply_folder(folder, mode, &resolver).await.summary();
        }
        total
    });

    if folders.len() > 1 {
        print_banner("OVERALL SUMMARY");
        println!("Total folders processed: {}", folders.len());
        println!("Total succeeded: {}", total.succeeded);
        println!("Total failed: {}", total.failed);
    }

    Ok(total)
}
