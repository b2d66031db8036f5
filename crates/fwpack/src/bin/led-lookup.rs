use std::io::{self, BufWriter, Write};

use clap::Parser;

/// Print a hue sweep LED lookup table as C initializer elements
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    fwpack::init_logger();

    let mut output = BufWriter::new(io::stdout().lock());
    fwpack_core::led_lookup(&mut output)?;
    output.flush()?;

    Ok(())
}
