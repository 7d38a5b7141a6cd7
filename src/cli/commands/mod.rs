//! CLI command definitions and dispatch.
//!
//! - `art`: artwork embedding (`album-art`)
//! - `meta`: album tag editing (`album-meta`)

mod art;
mod meta;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use art::{ArtCli, run_art};
pub use meta::{MetaCli, MetaCommand, run_meta};

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit successfully.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Initialize logging.
///
/// Progress lines are plain stdout prints; tracing output stays at `warn`
/// unless `RUST_LOG` asks for more.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("album_tagger=warn"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Build the single-threaded runtime the commands block on
pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Print a `====` framed heading
pub(crate) fn print_banner(title: &str) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("{}", title);
    println!("{}\n", rule);
}
