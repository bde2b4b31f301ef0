use std::io::{Error as IOError, ErrorKind, Read, Result as IOResult};

pub trait StringRead {
  /// Reads exactly `length` bytes and returns the text up to the first NUL.
  /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
  fn read_fixed_length_null_terminated_string(&mut self, length: usize) -> IOResult<String>;
}

impl<T: Read + ?Sized> StringRead for T {
  fn read_fixed_length_null_terminated_string(&mut self, length: usize) -> IOResult<String> {
    let mut buffer = vec![0u8; length];
    self.read_exact(&mut buffer)?;
    if let Some(end) = buffer.iter().position(|c| *c == 0) {
      buffer.truncate(end);
    }
    Ok(String::from_utf8(buffer).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
  }
}

pub trait RawDataRead {
  /// Reads `len` bytes without trusting `len` for the up-front allocation.
  fn read_data_exact(&mut self, len: usize) -> IOResult<Vec<u8>>;
  fn read_bytes<const N: usize>(&mut self) -> IOResult<[u8; N]>;
}

impl<T: Read + ?Sized> RawDataRead for T {
  fn read_data_exact(&mut self, len: usize) -> IOResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let read = Read::take(&mut *self, len as u64).read_to_end(&mut buffer)?;
    if read != len {
      return Err(IOError::new(ErrorKind::UnexpectedEof, format!("expected {} bytes, got {}", len, read)));
    }
    Ok(buffer)
  }

  fn read_bytes<const N: usize>(&mut self) -> IOResult<[u8; N]> {
    let mut buffer = [0u8; N];
    self.read_exact(&mut buffer)?;
    Ok(buffer)
  }
}

pub trait PrimitiveRead {
  fn read_u8(&mut self) -> IOResult<u8>;
  fn read_u16(&mut self) -> IOResult<u16>;
  fn read_u32(&mut self) -> IOResult<u32>;
  fn read_i16(&mut self) -> IOResult<i16>;
  fn read_i32(&mut self) -> IOResult<i32>;
  fn read_f32(&mut self) -> IOResult<f32>;
}

impl<T: Read + ?Sized> PrimitiveRead for T {
  fn read_u8(&mut self) -> IOResult<u8> {
    let mut buffer = [0u8; 1];
    self.read_exact(&mut buffer)?;
    Ok(u8::from_le_bytes(buffer))
  }

  fn read_u16(&mut self) -> IOResult<u16> {
    let mut buffer = [0u8; 2];
    self.read_exact(&mut buffer)?;
    Ok(u16::from_le_bytes(buffer))
  }

  fn read_u32(&mut self) -> IOResult<u32> {
    let mut buffer = [0u8; 4];
    self.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
  }

  fn read_i16(&mut self) -> IOResult<i16> {
    let mut buffer = [0u8; 2];
    self.read_exact(&mut buffer)?;
    Ok(i16::from_le_bytes(buffer))
  }

  fn read_i32(&mut self) -> IOResult<i32> {
    let mut buffer = [0u8; 4];
    self.read_exact(&mut buffer)?;
    Ok(i32::from_le_bytes(buffer))
  }

  fn read_f32(&mut self) -> IOResult<f32> {
    let mut buffer = [0u8; 4];
    self.read_exact(&mut buffer)?;
    Ok(f32::from_le_bytes(buffer))
  }
}
