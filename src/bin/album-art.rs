//! `album-art`: embed cover artwork into audio files.

use album_tagger::cli::{ArtCli, init_logging, parse_or_exit, run_art};

fn main() -> anyhow::Result<()> {
    let args: ArtCli = parse_or_exit();
    init_logging()?;

    run_art(&args)?;
    Ok(())
}
