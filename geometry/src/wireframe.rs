use bspgeom_lump::{check_index, BspError};

use crate::q2::Level;

/// Line-list view of the edge lump, three floats per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeWireframe {
  pub positions: Vec<f32>,
  pub indices: Vec<u16>,
}

/// Emits every vertex divided by `downscale` and one line per edge.
pub fn build_edge_wireframe(level: &Level, downscale: f32) -> Result<EdgeWireframe, BspError> {
  let mut positions = Vec::with_capacity(level.vertices.len() * 3);
  for vertex in &level.vertices {
    positions.extend_from_slice(&[vertex.position.x / downscale, vertex.position.y / downscale, vertex.position.z / downscale]);
  }

  let mut indices = Vec::with_capacity(level.edges.len() * 2);
  for edge in &level.edges {
    for vertex_index in edge.vertex_index {
      check_index("vertex", vertex_index as i64, level.vertices.len())?;
      indices.push(vertex_index);
    }
  }

  Ok(EdgeWireframe { positions, indices })
}
