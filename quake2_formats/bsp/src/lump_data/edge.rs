use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};

use crate::lump_data::LumpType;

/// Two vertex indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Edge {
  pub vertex_index: [u16; 2],
}

impl LumpData for Edge {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Edges
  }

  fn element_size(_version: i32) -> usize {
    4
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    // Read unsigned like the game does, not as i16: indices 32768 and up stay addressable.
    let vertex_index = [reader.read_u16()?, reader.read_u16()?];
    Ok(Self { vertex_index })
  }
}
