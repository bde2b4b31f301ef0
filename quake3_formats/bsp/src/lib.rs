extern crate bspgeom_lump;

pub mod lump_data;
mod map;
mod map_header;

pub use self::bspgeom_lump::{BspError, FormatError, Lump};
pub use self::lump_data::*;
pub use self::map::{Level, Map};
pub use self::map_header::{MapHeader, BSP_VERSIONS, DECLARED_LUMP_COUNT, LUMP_COUNT};
