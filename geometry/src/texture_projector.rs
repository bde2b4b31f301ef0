use nalgebra::{Vector2, Vector3};

use crate::q2::TextureInfo;

/// World units covered by one texture repeat.
pub const TEXTURE_SCALE: f32 = 64.0;

/// `(position · axis + offset) / scale`, summed in x, y, z order.
pub fn uv(position: &Vector3<f32>, axis: &Vector3<f32>, offset: f32, scale: f32) -> f32 {
  (position.x * axis.x + position.y * axis.y + position.z * axis.z + offset) / scale
}

pub fn project(position: &Vector3<f32>, texture_info: &TextureInfo) -> Vector2<f32> {
  Vector2::new(
    uv(position, &texture_info.u_axis, texture_info.u_offset, TEXTURE_SCALE),
    uv(position, &texture_info.v_axis, texture_info.v_offset, TEXTURE_SCALE),
  )
}
