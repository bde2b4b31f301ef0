use std::fmt::Debug;
use std::io::{Read, Seek, SeekFrom};
use std::ops::Range;

use log::debug;

use crate::{BspError, FormatError, Lump, RawDataRead};

/// Slot of a lump inside a format's directory.
pub trait LumpKind: Copy + Debug {
  fn index(self) -> usize;
  fn name(self) -> &'static str;
}

/// A fixed-size record stored in a lump.
pub trait LumpData: Sized {
  type Kind: LumpKind;

  fn lump_type() -> Self::Kind;
  fn element_size(version: i32) -> usize;
  fn read(reader: &mut dyn Read, version: i32) -> Result<Self, BspError>;
}

/// Seeks to `lump`, reads exactly its bytes and decodes them as `T` records.
///
/// On success the reader is left at `offset + length`.
pub fn read_lump_records<T: LumpData, R: Read + Seek + ?Sized>(reader: &mut R, lump: Lump, version: i32) -> Result<Vec<T>, BspError> {
  let kind = T::lump_type();
  let (offset, length) = lump.range(kind.name())?;
  let element_size = T::element_size(version);
  if length % element_size != 0 {
    return Err(FormatError::MisalignedLump {
      lump: kind.name(),
      length,
      record_size: element_size,
    }.into());
  }
  if length == 0 {
    debug!("Lump {} is empty", kind.name());
    return Ok(Vec::new());
  }

  reader.seek(SeekFrom::Start(offset))?;
  let data = reader.read_data_exact(length)?;

  let element_count = length / element_size;
  let mut elements = Vec::with_capacity(element_count);
  let mut records: &[u8] = &data;
  for _ in 0..element_count {
    elements.push(T::read(&mut records, version)?);
  }
  debug_assert!(records.is_empty(), "record reader for {} consumed the wrong amount", kind.name());
  debug!("Read {} records from lump {}", elements.len(), kind.name());
  Ok(elements)
}

/// Converts a raw index into `usize`, failing when it does not address `len` elements.
pub fn check_index(what: &'static str, index: i64, len: usize) -> Result<usize, FormatError> {
  if index < 0 || index as u64 >= len as u64 {
    return Err(FormatError::IndexOutOfRange { what, index, len });
  }
  Ok(index as usize)
}

/// Validates `count` records starting at `first` against a table of `len` records.
pub fn check_range(what: &'static str, first: i64, count: i64, len: usize) -> Result<Range<usize>, FormatError> {
  if first < 0 {
    return Err(FormatError::IndexOutOfRange { what, index: first, len });
  }
  if count < 0 {
    return Err(FormatError::IndexOutOfRange { what, index: first + count, len });
  }
  let end = first + count;
  if end as u64 > len as u64 {
    return Err(FormatError::IndexOutOfRange { what, index: end - 1, len });
  }
  Ok(first as usize..end as usize)
}
