use static_assertions::const_assert;
use std::{io::Write, mem};
use zerocopy::{byteorder::little_endian::U32, FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{checksum::crc32, FwpackError};

/// Number of bytes at the start of an image that are replaced by the header.
pub const HEADER_SIZE: usize = 8;

#[repr(C)]
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareHeader {
    /// CRC-32 over the whole original image, including the bytes this header replaces
    pub crc: U32,
    /// Length of the whole original image
    pub length: U32,
}

const_assert!(mem::size_of::<FirmwareHeader>() == HEADER_SIZE);

impl FirmwareHeader {
    pub fn for_firmware(firmware: &[u8]) -> Result<Self, FwpackError> {
        let length = u32::try_from(firmware.len())
            .map_err(|_| FwpackError::FirmwareTooLarge(firmware.len()))?;

        Ok(Self {
            crc: U32::new(crc32(firmware)),
            length: U32::new(length),
        })
    }

    /// Reads the header back from the front of a packed image.
    pub fn parse(image: &[u8]) -> Result<Self, FwpackError> {
        Self::read_from_prefix(image)
            .map(|(header, _)| header)
            .map_err(|_| FwpackError::HeaderTooShort(image.len()))
    }
}

/// Writes `[crc][length][firmware[8..]]` to `output`.
///
/// Images shorter than [`HEADER_SIZE`] produce the header alone.
pub fn prepend_header(firmware: &[u8], mut output: impl Write) -> Result<(), FwpackError> {
    let header = FirmwareHeader::for_firmware(firmware)?;

    log::debug!(
        "Header crc {:#010x}, length {}",
        header.crc.get(),
        header.length.get()
    );

    let payload = firmware.get(HEADER_SIZE..).unwrap_or_default();

    output
        .write_all(header.as_bytes())
        .map_err(FwpackError::FailedToWrite)?;
    output
        .write_all(payload)
        .map_err(FwpackError::FailedToWrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_emits_header_only() {
        let mut out = Vec::new();
        prepend_header(b"abc", &mut out).unwrap();

        assert_eq!(out, [0xc2, 0x41, 0x24, 0x35, 3, 0, 0, 0]);
    }

    #[test]
    fn exactly_header_sized() {
        let firmware = [0xffu8; HEADER_SIZE];
        let mut out = Vec::new();
        prepend_header(&firmware, &mut out).unwrap();

        assert_eq!(out.len(), HEADER_SIZE);
        assert_eq!(FirmwareHeader::parse(&out).unwrap().length.get(), 8);
    }

    #[test]
    fn header_replaces_first_bytes() {
        let firmware: Vec<u8> = (0..64).collect();
        let mut out = Vec::new();
        prepend_header(&firmware, &mut out).unwrap();

        let header = FirmwareHeader::parse(&out).unwrap();
        assert_eq!(header.length.get(), 64);
        assert_eq!(header.crc.get(), crc32(&firmware));
        assert_eq!(out.len(), firmware.len());
        assert_eq!(&out[HEADER_SIZE..], &firmware[HEADER_SIZE..]);
    }

    #[test]
    fn leading_bytes_only_affect_crc() {
        let mut a: Vec<u8> = (0..32).collect();
        let mut b = a.clone();
        a[0] = 0x55;
        b[0] = 0xaa;

        let mut out_a = Vec::new();
        let mut out_b = Vec::new();
        prepend_header(&a, &mut out_a).unwrap();
        prepend_header(&b, &mut out_b).unwrap();

        assert_ne!(out_a[..4], out_b[..4]);
        assert_eq!(out_a[4..], out_b[4..]);
    }

    #[test]
    fn parse_rejects_truncated_header() {
        assert!(matches!(
            FirmwareHeader::parse(&[1, 2, 3]),
            Err(FwpackError::HeaderTooShort(3))
        ));
    }
}
