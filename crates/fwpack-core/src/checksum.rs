use std::io::Write;

use crc::{Crc, CRC_32_ISO_HDLC};
use log::*;
use zerocopy::{byteorder::little_endian::U32, IntoBytes};

use crate::FwpackError;

/// The zlib/gzip CRC-32, reflected polynomial 0xEDB88320.
pub const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Checksum trailer as it is appended to the end of a firmware image.
pub type ChecksumTrailer = U32;

pub fn crc32(firmware: &[u8]) -> u32 {
    CRC32.checksum(firmware)
}

/// Writes the little-endian CRC-32 of `firmware`, and nothing else, to `output`.
///
/// The firmware itself is not written. The build is expected to concatenate
/// the original image with these 4 bytes.
pub fn append_checksum(firmware: &[u8], mut output: impl Write) -> Result<(), FwpackError> {
    let crc = crc32(firmware);

    debug!("CRC-32 of {} bytes: {:#010x}", firmware.len(), crc);

    output
        .write_all(ChecksumTrailer::new(crc).as_bytes())
        .map_err(FwpackError::FailedToWrite)
}
