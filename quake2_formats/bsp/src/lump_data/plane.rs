use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};
use nalgebra::Vector3;

use crate::lump_data::LumpType;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
  pub normal: Vector3<f32>,
  pub dist: f32,
  pub plane_type: i32,
}

impl LumpData for Plane {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Planes
  }

  fn element_size(_version: i32) -> usize {
    20
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let normal = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let dist = reader.read_f32()?;
    let plane_type = reader.read_i32()?;
    Ok(Self {
      normal,
      dist,
      plane_type,
    })
  }
}
