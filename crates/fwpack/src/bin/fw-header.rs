use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use clap::Parser;

/// Replace the first 8 bytes of a firmware image with its CRC-32 and length
///
/// Writes `[crc32 LE][length LE][image from byte 8]` to stdout. Checksum and
/// length cover the whole input file.
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
    fwpack::prepend::prepend(&cli.input, output)?;

    Ok(())
}
