/// Opaque white, RGBA.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Packs RGBA bytes into one float: ABGR in a `u32` reinterpreted as `f32` bits.
/// The lowest alpha bit is dropped so the result never lands in the NaN range.
pub fn pack_color(rgba: [u8; 4]) -> f32 {
  let abgr = u32::from_le_bytes(rgba);
  f32::from_bits(abgr & 0xfeff_ffff)
}
