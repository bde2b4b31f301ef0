use bspgeom_lump::{check_index, check_range, BspError, FormatError};
use log::debug;

use crate::bundle::{DrawRange, GeometryBundle, PrimitiveTopology, VertexLayout};
use crate::color::pack_color;
use crate::q3::{FaceType, Level};

const LAYOUT: VertexLayout = VertexLayout::PositionColorUvTexture;
const TEXTURE_COMPONENT: usize = 6;

/// Builds a flat triangle list from the meshverts of every polygon face.
///
/// Each meshvert yields `face.vertex + offset` in encounter order. The texture
/// index of a vertex is written by the last polygon face that references it,
/// vertices no polygon face references keep texture 0.
pub fn build_quake3_geometry(level: &Level) -> Result<GeometryBundle, BspError> {
  let components = LAYOUT.components();
  let mut vertices = vec![0f32; level.vertices.len() * components];
  for (data, vertex) in vertices.chunks_exact_mut(components).zip(&level.vertices) {
    data.copy_from_slice(&[
      vertex.position.x,
      vertex.position.y,
      vertex.position.z,
      pack_color(vertex.color),
      vertex.tex_coord[0].x,
      vertex.tex_coord[0].y,
      0f32,
    ]);
  }

  let mut indices = Vec::<u16>::new();
  let mut skipped_faces = 0usize;
  for face in &level.faces {
    if face.face_type != FaceType::Polygon {
      skipped_faces += 1;
      continue;
    }

    check_index("texture", face.texture as i64, level.textures.len())?;
    let mesh_verts = check_range("meshvert", face.mesh_vert as i64, face.mesh_vert_count as i64, level.mesh_verts.len())?;
    for mesh_vert in &level.mesh_verts[mesh_verts] {
      let index = face.vertex as i64 + mesh_vert.offset as i64;
      let vertex = check_index("vertex", index, level.vertices.len())?;
      let index = u16::try_from(vertex).map_err(|_| FormatError::IndexOutOfRange {
        what: "16 bit vertex index",
        index,
        len: u16::MAX as usize + 1,
      })?;
      indices.push(index);
      vertices[vertex * components + TEXTURE_COMPONENT] = face.texture as f32;
    }
  }

  if skipped_faces != 0 {
    debug!("Skipped {} non-polygon faces", skipped_faces);
  }

  let draw_ranges = if indices.is_empty() {
    Vec::new()
  } else {
    vec![DrawRange {
      offset: 0,
      count: indices.len() as u32,
    }]
  };

  Ok(GeometryBundle {
    layout: LAYOUT,
    topology: PrimitiveTopology::TriangleList,
    vertices,
    indices,
    draw_ranges,
    texture_names: level.textures.iter().map(|texture| texture.name.clone()).collect(),
  })
}
