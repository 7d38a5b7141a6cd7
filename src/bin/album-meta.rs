//! `album-meta`: set or remove the album tag across a folder.

use album_tagger::cli::{MetaCli, init_logging, parse_or_exit, run_meta};

fn main() -> anyhow::Result<()> {
    let args: MetaCli = parse_or_exit();
    init_logging()?;

    run_meta(&args)?;
    Ok(())
}
