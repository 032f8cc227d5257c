mod args;

use anyhow::{Context, Result};
use ascii_tiles::{PixelBuffer, convert};
use args::Cli;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid options")?;

    let img = image::open(&cli.image)
        .with_context(|| format!("failed to load {}", cli.image.display()))?;
    log::info!(
        "decoded {} ({}x{})",
        cli.image.display(),
        img.width(),
        img.height()
    );

    let grid = convert(PixelBuffer::from_dynamic(img), &config)?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_lines(BufWriter::new(file), &grid.lines())?;
            log::info!("wrote {} rows to {}", grid.height(), path.display());
        }
        None => write_lines(io::stdout().lock(), &grid.lines())?,
    }

    Ok(())
}

fn write_lines<W: Write>(mut out: W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
