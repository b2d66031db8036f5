use std::{io::Write, path::Path};

use fwpack_core::{prepend_header, FwpackError, HEADER_SIZE};
use log::warn;

use crate::read_firmware;

pub fn prepend<P: AsRef<Path>>(input_path: P, mut output: impl Write) -> Result<(), FwpackError> {
    let firmware = read_firmware(&input_path)?;

    if firmware.len() < HEADER_SIZE {
        warn!(
            "{} is only {} bytes, writing the header without payload",
            input_path.as_ref().display(),
            firmware.len()
        );
    }

    prepend_header(&firmware, &mut output)?;
    output.flush().map_err(FwpackError::FailedToWrite)
}
