use std::io::Error as IOError;

use thiserror::Error;

/// Everything that can abort loading a level.
#[derive(Error, Debug)]
pub enum BspError {
  /// The byte source failed or ended early (`ErrorKind::UnexpectedEof`).
  #[error("i/o error: {0}")]
  Io(#[from] IOError),

  #[error(transparent)]
  Format(#[from] FormatError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
  #[error("bad magic {found:?}, expected \"IBSP\"")]
  BadMagic {
    found: [u8; 4],
  },

  #[error("unsupported BSP version {0}")]
  UnsupportedVersion(i32),

  #[error("lump {lump} has invalid offset {offset} or length {length}")]
  InvalidLump {
    lump: &'static str,
    offset: i32,
    length: i32,
  },

  #[error("lump {lump} length {length} is not a multiple of its record size {record_size}")]
  MisalignedLump {
    lump: &'static str,
    length: usize,
    record_size: usize,
  },

  #[error("{what} index {index} is out of range (len {len})")]
  IndexOutOfRange {
    what: &'static str,
    index: i64,
    len: usize,
  },
}

impl BspError {
  pub fn is_unexpected_eof(&self) -> bool {
    matches!(self, BspError::Io(error) if error.kind() == std::io::ErrorKind::UnexpectedEof)
  }

  pub fn format_error(&self) -> Option<&FormatError> {
    match self {
      BspError::Format(error) => Some(error),
      BspError::Io(_) => None,
    }
  }
}
