use std::io::Read;

use bspgeom_lump::{BspError, LumpData, PrimitiveRead};
use nalgebra::Vector3;

use crate::lump_data::LumpType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceType {
  Polygon,
  Patch,
  Mesh,
  Billboard,
  Unknown(i32),
}

impl FaceType {
  pub fn from_raw(value: i32) -> Self {
    match value {
      1 => FaceType::Polygon,
      2 => FaceType::Patch,
      3 => FaceType::Mesh,
      4 => FaceType::Billboard,
      other => FaceType::Unknown(other),
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Face {
  pub texture: i32,
  pub effect: i32,
  pub face_type: FaceType,
  pub vertex: i32,
  pub vertex_count: i32,
  pub mesh_vert: i32,
  pub mesh_vert_count: i32,
  pub lightmap_index: i32,
  pub lightmap_start: [i32; 2],
  pub lightmap_size: [i32; 2],
  pub lightmap_origin: Vector3<f32>,
  pub lightmap_vecs: [Vector3<f32>; 2],
  pub normal: Vector3<f32>,
  pub size: [i32; 2],
}

impl LumpData for Face {
  type Kind = LumpType;

  fn lump_type() -> LumpType {
    LumpType::Faces
  }

  fn element_size(_version: i32) -> usize {
    104
  }

  fn read(reader: &mut dyn Read, _version: i32) -> Result<Self, BspError> {
    let texture = reader.read_i32()?;
    let effect = reader.read_i32()?;
    let face_type = FaceType::from_raw(reader.read_i32()?);
    let vertex = reader.read_i32()?;
    let vertex_count = reader.read_i32()?;
    let mesh_vert = reader.read_i32()?;
    let mesh_vert_count = reader.read_i32()?;
    let lightmap_index = reader.read_i32()?;
    let lightmap_start = [reader.read_i32()?, reader.read_i32()?];
    let lightmap_size = [reader.read_i32()?, reader.read_i32()?];
    let lightmap_origin = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let lightmap_vecs = [
      Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?),
      Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?),
    ];
    let normal = Vector3::<f32>::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
    let size = [reader.read_i32()?, reader.read_i32()?];
    Ok(Self {
      texture,
      effect,
      face_type,
      vertex,
      vertex_count,
      mesh_vert,
      mesh_vert_count,
      lightmap_index,
      lightmap_start,
      lightmap_size,
      lightmap_origin,
      lightmap_vecs,
      normal,
      size,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn face_bytes(face_type: i32) -> Vec<u8> {
    let mut bytes = Vec::new();
    for value in [3i32, -1, face_type, 5, 4, 12, 6, 2, 10, 20, 16, 8] {
      bytes.extend_from_slice(&value.to_le_bytes());
    }
    for value in [1.0f32, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] {
      bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes
  }

  #[test]
  fn reads_all_104_bytes() {
    let bytes = face_bytes(1);
    assert_eq!(bytes.len(), Face::element_size(46));

    let mut reader = &bytes[..];
    let face = Face::read(&mut reader, 46).unwrap();
    assert!(reader.is_empty());
    assert_eq!(face.texture, 3);
    assert_eq!(face.effect, -1);
    assert_eq!(face.face_type, FaceType::Polygon);
    assert_eq!((face.vertex, face.vertex_count), (5, 4));
    assert_eq!((face.mesh_vert, face.mesh_vert_count), (12, 6));
    assert_eq!(face.lightmap_index, 2);
    assert_eq!(face.lightmap_start, [10, 20]);
    assert_eq!(face.lightmap_size, [16, 8]);
    assert_eq!(face.lightmap_origin, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(face.lightmap_vecs[1], Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(face.normal, Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(face.size, [0, 0]);
  }

  #[test]
  fn unknown_types_are_kept() {
    let bytes = face_bytes(9);
    let mut reader = &bytes[..];
    let face = Face::read(&mut reader, 46).unwrap();
    assert!(reader.is_empty());
    assert_eq!(face.face_type, FaceType::Unknown(9));
  }
}
