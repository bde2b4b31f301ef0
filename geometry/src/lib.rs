extern crate bspgeom_lump;
pub extern crate bspgeom_q2_bsp as q2;
pub extern crate bspgeom_q3_bsp as q3;

mod bundle;
mod color;
mod config;
mod loader;
mod quake2_geometry;
mod quake3_geometry;
mod texture_projector;
mod textures;
mod wireframe;

pub use self::bspgeom_lump::{BspError, FormatError};
pub use self::bundle::{DrawRange, GeometryBundle, PrimitiveTopology, VertexLayout};
pub use self::color::{pack_color, WHITE};
pub use self::config::GeometryConfig;
pub use self::loader::{load, load_file, load_quake2, load_quake3, BspFormat, Level, LoadedLevel};
pub use self::quake2_geometry::build_quake2_geometry;
pub use self::quake3_geometry::build_quake3_geometry;
pub use self::texture_projector::{project, uv, TEXTURE_SCALE};
pub use self::textures::resolve_texture_slots;
pub use self::wireframe::{build_edge_wireframe, EdgeWireframe};
