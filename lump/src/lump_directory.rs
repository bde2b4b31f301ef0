use std::io::{Read, Result as IOResult};

use log::trace;

use crate::lump::Lump;
use crate::{FormatError, PrimitiveRead, RawDataRead};

/// Magic shared by both supported BSP generations.
pub const BSP_IDENTIFIER: [u8; 4] = *b"IBSP";

/// Reads only magic and version, enough to tell the formats apart.
pub fn read_prologue(reader: &mut dyn Read) -> IOResult<([u8; 4], i32)> {
  let identifier = reader.read_bytes::<4>()?;
  let version = reader.read_i32()?;
  Ok((identifier, version))
}

/// File header: magic, version and `LUMP_COUNT` lump descriptors.
#[derive(Clone, Debug)]
pub struct LumpDirectory<const LUMP_COUNT: usize> {
  pub identifier: [u8; 4],
  pub version: i32,
  pub lumps: [Lump; LUMP_COUNT],
}

impl<const LUMP_COUNT: usize> LumpDirectory<LUMP_COUNT> {
  pub fn read(reader: &mut dyn Read) -> IOResult<Self> {
    let (identifier, version) = read_prologue(reader)?;
    let mut lumps = [Lump::default(); LUMP_COUNT];
    for lump in &mut lumps {
      *lump = Lump::read(reader)?;
    }
    trace!("Read lump directory, version: {}, lumps: {}", version, LUMP_COUNT);
    Ok(Self {
      identifier,
      version,
      lumps,
    })
  }

  /// Descriptors past the ones stored in the header read as empty lumps.
  pub fn lump(&self, index: usize) -> Lump {
    self.lumps.get(index).copied().unwrap_or_default()
  }

  pub fn validate(&self, supported_versions: &[i32]) -> Result<(), FormatError> {
    if self.identifier != BSP_IDENTIFIER {
      return Err(FormatError::BadMagic {
        found: self.identifier,
      });
    }
    if !supported_versions.contains(&self.version) {
      return Err(FormatError::UnsupportedVersion(self.version));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn header_bytes(magic: &[u8; 4], version: i32, lumps: &[(i32, i32)]) -> Vec<u8> {
    let mut bytes = magic.to_vec();
    bytes.extend_from_slice(&version.to_le_bytes());
    for (offset, length) in lumps {
      bytes.extend_from_slice(&offset.to_le_bytes());
      bytes.extend_from_slice(&length.to_le_bytes());
    }
    bytes
  }

  #[test]
  fn reads_descriptors_in_order() {
    let bytes = header_bytes(b"IBSP", 38, &[(32, 0), (32, 20), (52, 12)]);
    let directory = LumpDirectory::<3>::read(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(directory.identifier, *b"IBSP");
    assert_eq!(directory.version, 38);
    assert_eq!(directory.lump(1), Lump { file_offset: 32, file_length: 20 });
    assert_eq!(directory.lump(2), Lump { file_offset: 52, file_length: 12 });
    assert!(directory.validate(&[38]).is_ok());
    assert!(directory.lump(3).is_empty());
  }

  #[test]
  fn truncated_header_is_eof() {
    let bytes = header_bytes(b"IBSP", 38, &[(32, 0)]);
    let err = LumpDirectory::<2>::read(&mut Cursor::new(bytes)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
  }

  #[test]
  fn rejects_unknown_magic_and_version() {
    let directory = LumpDirectory::<1>::read(&mut Cursor::new(header_bytes(b"VBSP", 38, &[(0, 0)]))).unwrap();
    assert_eq!(directory.validate(&[38]), Err(FormatError::BadMagic { found: *b"VBSP" }));

    let directory = LumpDirectory::<1>::read(&mut Cursor::new(header_bytes(b"IBSP", 29, &[(0, 0)]))).unwrap();
    assert_eq!(directory.validate(&[38]), Err(FormatError::UnsupportedVersion(29)));
  }
}
