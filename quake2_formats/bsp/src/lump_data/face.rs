use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead, RawDataRead};

use crate::lump_data::LumpType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
  pub plane_index: u16,
  pub plane_side: i16,
  pub first_edge: i32,
  pub edges_count: i16,
  pub texture_info: i16,
  pub styles: [u8; 4],
  pub light_offset: i32,
}

impl LumpData for Face {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Faces
  }

  fn element_size(_version: i32) -> usize {
    20
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    // Unsigned on disk in game content, read as u16 rather than i16.
    let plane_index = reader.read_u16()?;
    let plane_side = reader.read_i16()?;
    let first_edge = reader.read_i32()?;
    let edges_count = reader.read_i16()?;
    let texture_info = reader.read_i16()?;
    let styles = reader.read_bytes::<4>()?;
    let light_offset = reader.read_i32()?;
    Ok(Self {
      plane_index,
      plane_side,
      first_edge,
      edges_count,
      texture_info,
      styles,
      light_offset,
    })
  }
}
