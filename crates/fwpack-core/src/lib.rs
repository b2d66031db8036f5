use std::{io::Write, path::PathBuf};

use thiserror::Error;

pub mod checksum;
pub mod color;
pub mod header;
pub mod lut;

pub use checksum::{append_checksum, crc32};
pub use header::{prepend_header, FirmwareHeader, HEADER_SIZE};
pub use lut::LedTable;

/// Writes the default LED lookup table.
pub fn led_lookup(output: impl Write) -> Result<(), FwpackError> {
    LedTable::TNG.write(output)
}

#[derive(Error, Debug)]
pub enum FwpackError {
    #[error("Failed to read firmware file {path}")]
    FailedToRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write to output")]
    FailedToWrite(std::io::Error),
    #[error("Firmware is {0} bytes, which does not fit the 32 bit length field")]
    FirmwareTooLarge(usize),
    #[error("Image is {0} bytes, too short to hold a firmware header")]
    HeaderTooShort(usize),
}
