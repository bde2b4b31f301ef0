use std::io::Read;

use bitflags::bitflags;
use bspgeom_lump::{BspError, LumpData, PrimitiveRead, StringRead};
use nalgebra::Vector3;

use crate::lump_data::LumpType;

bitflags! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct SurfaceFlags: i32 {
    const LIGHT = 0x1;
    const SLICK = 0x2;
    const SKY = 0x4;
    const WARP = 0x8;
    const TRANS33 = 0x10;
    const TRANS66 = 0x20;
    const FLOWING = 0x40;
    const NODRAW = 0x80;
  }
}

const TEXTURE_NAME_LENGTH: usize = 32;

#[derive(Clone, Debug, PartialEq)]
pub struct TextureInfo {
  pub u_axis: Vector3<f32>,
  pub u_offset: f32,
  pub v_axis: Vector3<f32>,
  pub v_offset: f32,
  pub flags: SurfaceFlags,
  pub value: i32,
  pub texture_name: String,
  pub next_texture_info: i32,
}

impl LumpData for TextureInfo {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::TextureInfo
  }

  fn element_size(_version: i32) -> usize {
    76
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let u_axis = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let u_offset = reader.read_f32()?;
    let v_axis = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let v_offset = reader.read_f32()?;
    let flags = SurfaceFlags::from_bits_retain(reader.read_i32()?);
    let value = reader.read_i32()?;
    let texture_name = reader.read_fixed_length_null_terminated_string(TEXTURE_NAME_LENGTH)?;
    let next_texture_info = reader.read_i32()?;
    Ok(Self {
      u_axis,
      u_offset,
      v_axis,
      v_offset,
      flags,
      value,
      texture_name,
      next_texture_info,
    })
  }
}
