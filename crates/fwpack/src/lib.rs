use std::{fs, io::Write, path::Path};

use env_logger::Env;
use fwpack_core::FwpackError;
use log::*;

pub mod append;
pub mod prepend;

/// Sets up logging on stderr, stdout is reserved for the packed output.
///
/// The filter defaults to `warn` and can be raised with `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let level = record.level();
            if level == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .init();
}

/// Reads the whole firmware image into memory.
pub fn read_firmware<P: AsRef<Path>>(input_path: P) -> Result<Vec<u8>, FwpackError> {
    let input = input_path.as_ref();

    let firmware = fs::read(input).map_err(|source| FwpackError::FailedToRead {
        path: input.to_owned(),
        source,
    })?;

    info!("Read {} bytes from {}", firmware.len(), input.display());

    Ok(firmware)
}
