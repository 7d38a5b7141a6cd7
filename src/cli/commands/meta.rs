//! Album tag editing command.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::album::update_album;
use crate::apply::RunSummary;
use crate::config::Config;
use crate::error::Error;
use crate::scanner::folder_name;

/// Set or remove the album tag on every audio file in a folder.
#[derive(Parser, Debug)]
#[command(name = "album-meta", author, version, about, long_about = None)]
pub struct MetaCli {
    #[command(subcommand)]
    pub command: MetaCommand,

    /// Audio file extension to match (repeatable)
    #[arg(long = "ext", value_name = "EXT", global = true, default_value = "m4a")]
    pub extensions: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum MetaCommand {
    /// Set the album tag (defaults to the folder's own name)
    Set {
        folder: PathBuf,
        album_name: Option<String>,
    },
    /// Remove the album tag
    Del { folder: PathBuf },
}

pub fn run_meta(cli: &MetaCli) -> anyhow::Result<RunSummary> {
    let config = Config::default().with_extensions(&cli.extensions);

    match &cli.command {
        MetaCommand::Set { folder, album_name } => {
            let album = match album_name {
                Some(name) => name.clone(),
                None => folder_name(folder)
                    .ok_or_else(|| Error::NotADirectory(folder.clone()))
                    .context("cannot derive an album name from the folder")?,
            };
            let summary = update_album(folder, Some(&album), &config)?;
            println!("Album set to: {}", album);
            Ok(summary)
        }
        MetaCommand::Del { folder } => {
            let summary = update_album(folder, None, &config)?;
            println!("Album tags removed");
            Ok(summary)
        }
    }
}
