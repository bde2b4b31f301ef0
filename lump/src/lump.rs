use std::io::{Read, Result as IOResult};

use crate::{FormatError, PrimitiveRead};

/// Byte range of one lump, relative to the start of the file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Lump {
  pub file_offset: i32,
  pub file_length: i32,
}

impl Lump {
  pub fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let file_offset = reader.read_i32()?;
    let file_length = reader.read_i32()?;

    Ok(Self {
      file_offset,
      file_length,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.file_length == 0
  }

  /// Offset and length as unsigned values, rejecting negative fields.
  pub fn range(&self, lump: &'static str) -> Result<(u64, usize), FormatError> {
    if self.file_offset < 0 || self.file_length < 0 {
      return Err(FormatError::InvalidLump {
        lump,
        offset: self.file_offset,
        length: self.file_length,
      });
    }
    Ok((self.file_offset as u64, self.file_length as usize))
  }
}
