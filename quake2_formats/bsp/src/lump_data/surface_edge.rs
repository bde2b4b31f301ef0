use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};

use crate::lump_data::LumpType;

/// Signed edge reference: `abs(index)` picks the edge, the sign picks the direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SurfaceEdge {
  pub index: i32,
}

impl SurfaceEdge {
  pub fn edge_index(&self) -> i64 {
    (self.index as i64).abs()
  }

  /// Only strictly positive references walk the edge from its first to its second vertex.
  pub fn is_forward(&self) -> bool {
    self.index > 0
  }
}

impl LumpData for SurfaceEdge {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::SurfaceEdges
  }

  fn element_size(_version: i32) -> usize {
    4
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let index = reader.read_i32()?;
    Ok(Self { index })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sign_selects_direction() {
    let forward = SurfaceEdge { index: 3 };
    let backward = SurfaceEdge { index: -3 };
    assert_eq!(forward.edge_index(), backward.edge_index());
    assert!(forward.is_forward());
    assert!(!backward.is_forward());
    assert!(!SurfaceEdge { index: 0 }.is_forward());
    assert_eq!(SurfaceEdge { index: i32::MIN }.edge_index(), 2_147_483_648);
  }
}
