pub use self::face::{Face, FaceType};
pub use self::mesh_vert::MeshVert;
pub use self::texture::{ContentFlags, SurfaceFlags, Texture};
pub use self::vertex::Vertex;

use bspgeom_lump::LumpKind;

mod face;
mod mesh_vert;
mod texture;
mod vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LumpType {
  Entities = 0,
  Textures = 1,
  Planes = 2,
  Nodes = 3,
  Leafs = 4,
  LeafFaces = 5,
  LeafBrushes = 6,
  Models = 7,
  Brushes = 8,
  BrushSides = 9,
  Vertices = 10,
  MeshVerts = 11,
  Effects = 12,
  Faces = 13,
  Lightmaps = 14,
  LightVols = 15,
  VisData = 16,
}

impl LumpKind for LumpType {
  fn index(self) -> usize {
    self as usize
  }

  fn name(self) -> &'static str {
    match self {
      LumpType::Entities => "entities",
      LumpType::Textures => "textures",
      LumpType::Planes => "planes",
      LumpType::Nodes => "nodes",
      LumpType::Leafs => "leafs",
      LumpType::LeafFaces => "leaf faces",
      LumpType::LeafBrushes => "leaf brushes",
      LumpType::Models => "models",
      LumpType::Brushes => "brushes",
      LumpType::BrushSides => "brush sides",
      LumpType::Vertices => "vertices",
      LumpType::MeshVerts => "meshverts",
      LumpType::Effects => "effects",
      LumpType::Faces => "faces",
      LumpType::Lightmaps => "lightmaps",
      LumpType::LightVols => "light volumes",
      LumpType::VisData => "visdata",
    }
  }
}
