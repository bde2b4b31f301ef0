use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead, RawDataRead};
use nalgebra::{Vector2, Vector3};

use crate::lump_data::LumpType;

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
  /// Stored `(p0, p1, p2)`, converted to the renderer's axes as `(p1, -p2, p0)`.
  pub position: Vector3<f32>,
  /// Surface UV and lightmap UV.
  pub tex_coord: [Vector2<f32>; 2],
  pub normal: Vector3<f32>,
  pub color: [u8; 4],
}

impl LumpData for Vertex {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Vertices
  }

  fn element_size(_version: i32) -> usize {
    44
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let p0 = reader.read_f32()?;
    let p1 = reader.read_f32()?;
    let p2 = reader.read_f32()?;
    let position = Vector3::<f32>::new(p1, -p2, p0);
    let tex_coord = [
      Vector2::<f32>::new(reader.read_f32()?, reader.read_f32()?),
      Vector2::<f32>::new(reader.read_f32()?, reader.read_f32()?),
    ];
    let normal = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let color = reader.read_bytes::<4>()?;
    Ok(Self {
      position,
      tex_coord,
      normal,
      color,
    })
  }
}
