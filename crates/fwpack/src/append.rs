use std::{io::Write, path::Path};

use fwpack_core::{append_checksum, FwpackError};

use crate::read_firmware;

pub fn append<P: AsRef<Path>>(input_path: P, mut output: impl Write) -> Result<(), FwpackError> {
    let firmware = read_firmware(input_path)?;

    append_checksum(&firmware, &mut output)?;
    output.flush().map_err(FwpackError::FailedToWrite)
}
