use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};
use nalgebra::Vector3;

use crate::lump_data::LumpType;

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
  /// Already converted to the renderer's axes: the stored `(a, b, c)` becomes `(b, -c, a)`.
  pub position: Vector3<f32>,
}

impl LumpData for Vertex {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Vertices
  }

  fn element_size(_version: i32) -> usize {
    12
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let a = reader.read_f32()?;
    let b = reader.read_f32()?;
    let c = reader.read_f32()?;
    Ok(Self {
      position: Vector3::new(b, -c, a),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn permutes_axes() {
    let mut bytes = Vec::new();
    for value in [1.0f32, 2.0, 3.0] {
      bytes.extend_from_slice(&value.to_le_bytes());
    }
    let vertex = Vertex::read(&mut &bytes[..], 38).unwrap();
    assert_eq!(vertex.position, Vector3::new(2.0, -3.0, 1.0));
  }
}
