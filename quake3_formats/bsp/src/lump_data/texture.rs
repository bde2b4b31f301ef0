use std::io::Read;

use bitflags::bitflags;
use bspgeom_lump::{BspError, LumpData, PrimitiveRead, StringRead};

use crate::lump_data::LumpType;

bitflags! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct SurfaceFlags: i32 {
    const NODAMAGE = 0x1;
    const SLICK = 0x2;
    const SKY = 0x4;
    const LADDER = 0x8;
    const NOIMPACT = 0x10;
    const NOMARKS = 0x20;
    const FLESH = 0x40;
    const NODRAW = 0x80;
    const HINT = 0x100;
    const SKIP = 0x200;
    const NOLIGHTMAP = 0x400;
    const POINTLIGHT = 0x800;
    const METALSTEPS = 0x1000;
    const NOSTEPS = 0x2000;
    const NONSOLID = 0x4000;
    const LIGHTFILTER = 0x8000;
    const ALPHASHADOW = 0x10000;
    const NODLIGHT = 0x20000;
  }
}

bitflags! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub struct ContentFlags: i32 {
    const SOLID = 0x1;
    const LAVA = 0x8;
    const SLIME = 0x10;
    const WATER = 0x20;
    const FOG = 0x40;
    const AREAPORTAL = 0x8000;
    const PLAYERCLIP = 0x10000;
    const MONSTERCLIP = 0x20000;
    const TRIGGER = 0x40000000;
  }
}

const TEXTURE_NAME_LENGTH: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
  pub name: String,
  pub flags: SurfaceFlags,
  pub contents: ContentFlags,
}

impl LumpData for Texture {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Textures
  }

  fn element_size(_version: i32) -> usize {
    72
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let name = reader.read_fixed_length_null_terminated_string(TEXTURE_NAME_LENGTH)?;
    let flags = SurfaceFlags::from_bits_retain(reader.read_i32()?);
    let contents = ContentFlags::from_bits_retain(reader.read_i32()?);
    Ok(Self {
      name,
      flags,
      contents,
    })
  }
}
