pub use self::edge::Edge;
pub use self::face::Face;
pub use self::plane::Plane;
pub use self::surface_edge::SurfaceEdge;
pub use self::texture_info::{SurfaceFlags, TextureInfo};
pub use self::vertex::Vertex;

use bspgeom_lump::LumpKind;

mod edge;
mod face;
mod plane;
mod surface_edge;
mod texture_info;
mod vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LumpType {
  Entities = 0,
  Planes = 1,
  Vertices = 2,
  Visibility = 3,
  Nodes = 4,
  TextureInfo = 5,
  Faces = 6,
  Lighting = 7,
  Leafs = 8,
  LeafFaces = 9,
  LeafBrushes = 10,
  Edges = 11,
  SurfaceEdges = 12,
  Models = 13,
  Brushes = 14,
  BrushSides = 15,
  Pop = 16,
  Areas = 17,
  AreaPortals = 18,
}

impl LumpKind for LumpType {
  fn index(self) -> usize {
    self as usize
  }

  fn name(self) -> &'static str {
    match self {
      LumpType::Entities => "entities",
      LumpType::Planes => "planes",
      LumpType::Vertices => "vertices",
      LumpType::Visibility => "visibility",
      LumpType::Nodes => "nodes",
      LumpType::TextureInfo => "texinfo",
      LumpType::Faces => "faces",
      LumpType::Lighting => "lighting",
      LumpType::Leafs => "leafs",
      LumpType::LeafFaces => "leaf faces",
      LumpType::LeafBrushes => "leaf brushes",
      LumpType::Edges => "edges",
      LumpType::SurfaceEdges => "surfedges",
      LumpType::Models => "models",
      LumpType::Brushes => "brushes",
      LumpType::BrushSides => "brush sides",
      LumpType::Pop => "pop",
      LumpType::Areas => "areas",
      LumpType::AreaPortals => "area portals",
    }
  }
}
