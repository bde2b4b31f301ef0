use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};

use crate::lump_data::LumpType;

/// Vertex offset relative to the owning face's first vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshVert {
  pub offset: i32,
}

impl LumpData for MeshVert {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::MeshVerts
  }

  fn element_size(_version: i32) -> usize {
    4
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let offset = reader.read_i32()?;
    Ok(Self { offset })
  }
}
