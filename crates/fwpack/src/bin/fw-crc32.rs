use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use clap::Parser;

/// Write the little-endian CRC-32 of a firmware image to stdout
///
/// Only the 4 checksum bytes are written; append them to the image yourself.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Input firmware file
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    fwpack::init_logger();

    let output = BufWriter::new(io::stdout().lock());
    fwpack::append::append(&cli.input, output)?;

    Ok(())
}
