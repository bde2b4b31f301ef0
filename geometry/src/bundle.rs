#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexLayout {
  /// `x, y, z, packed color, u, v`
  PositionColorUv,
  /// `x, y, z, packed color, u, v, texture index`
  PositionColorUvTexture,
}

impl VertexLayout {
  pub fn components(self) -> usize {
    match self {
      VertexLayout::PositionColorUv => 6,
      VertexLayout::PositionColorUvTexture => 7,
    }
  }
}

/// How the consumer should interpret each draw range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveTopology {
  TriangleFan,
  TriangleList,
}

/// A slice of the index buffer, in indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawRange {
  pub offset: u32,
  pub count: u32,
}

/// Renderer agnostic output of a load: interleaved vertices, 16 bit indices,
/// the ranges to draw and the texture names the renderer has to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryBundle {
  pub layout: VertexLayout,
  pub topology: PrimitiveTopology,
  pub vertices: Vec<f32>,
  pub indices: Vec<u16>,
  pub draw_ranges: Vec<DrawRange>,
  pub texture_names: Vec<String>,
}

impl GeometryBundle {
  pub fn vertex_count(&self) -> usize {
    self.vertices.len() / self.layout.components()
  }

  pub fn vertex(&self, index: usize) -> &[f32] {
    let components = self.layout.components();
    &self.vertices[index * components..(index + 1) * components]
  }

  /// The indices a draw range covers, `None` if it reaches past the index buffer.
  pub fn range_indices(&self, range: DrawRange) -> Option<&[u16]> {
    let end = range.offset.checked_add(range.count)?;
    self.indices.get(range.offset as usize..end as usize)
  }
}
