use bspgeom_lump::{check_index, check_range, BspError};
use log::trace;

use crate::bundle::{DrawRange, GeometryBundle, PrimitiveTopology, VertexLayout};
use crate::color::{pack_color, WHITE};
use crate::q2::{Level, TextureInfo};
use crate::texture_projector;

const LAYOUT: VertexLayout = VertexLayout::PositionColorUv;
const U_COMPONENT: usize = 4;
const V_COMPONENT: usize = 5;

/// Builds one triangle-fan range per face from the surfedge loop.
///
/// Every surfedge contributes its two endpoints, so a face with `n` surfedges
/// owns `2n` indices. Vertices are shared between faces and their UV is
/// overwritten by whichever face touches them last.
pub fn build_quake2_geometry(level: &Level) -> Result<GeometryBundle, BspError> {
  let components = LAYOUT.components();
  let mut vertices = vec![0f32; level.vertices.len() * components];
  for (data, vertex) in vertices.chunks_exact_mut(components).zip(&level.vertices) {
    data.copy_from_slice(&[vertex.position.x, vertex.position.y, vertex.position.z, pack_color(WHITE), 0f32, 0f32]);
  }

  let index_count: usize = level.faces.iter().map(|face| face.edges_count.max(0) as usize * 2).sum();
  let mut indices = Vec::<u16>::with_capacity(index_count);
  let mut draw_ranges = Vec::<DrawRange>::with_capacity(level.faces.len());

  for face in &level.faces {
    let texture_info = &level.texture_infos[check_index("texinfo", face.texture_info as i64, level.texture_infos.len())?];
    let surface_edges = check_range("surfedge", face.first_edge as i64, face.edges_count as i64, level.surface_edges.len())?;

    let offset = indices.len();
    for surface_edge in &level.surface_edges[surface_edges] {
      let edge = &level.edges[check_index("edge", surface_edge.edge_index(), level.edges.len())?];
      let [first, second] = edge.vertex_index;
      let pair = if surface_edge.is_forward() { [first, second] } else { [second, first] };
      for vertex_index in pair {
        let vertex = check_index("vertex", vertex_index as i64, level.vertices.len())?;
        indices.push(vertex_index);
        write_uv(&mut vertices[vertex * components..(vertex + 1) * components], level, vertex, texture_info);
      }
    }

    let range = DrawRange {
      offset: offset as u32,
      count: (indices.len() - offset) as u32,
    };
    trace!("Face range: {:?}", range);
    draw_ranges.push(range);
  }

  Ok(GeometryBundle {
    layout: LAYOUT,
    topology: PrimitiveTopology::TriangleFan,
    vertices,
    indices,
    draw_ranges,
    texture_names: level.texture_infos.iter().map(|info| info.texture_name.clone()).collect(),
  })
}

fn write_uv(data: &mut [f32], level: &Level, vertex: usize, texture_info: &TextureInfo) {
  let uv = texture_projector::project(&level.vertices[vertex].position, texture_info);
  data[U_COMPONENT] = uv.x;
  data[V_COMPONENT] = uv.y;
}
