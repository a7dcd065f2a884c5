// src/bin/cli.rs
use color_eyre::eyre::eyre;
use suno_library::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let exported = cli::run().map_err(|e| eyre!("{e}"))?;
    if !exported {
        // No songs found: already reported, no file written
        std::process::exit(2);
    }
    Ok(())
}
