use bspgeom_lump::LumpDirectory;

pub const LUMP_COUNT: usize = 19;
pub const BSP_VERSION: i32 = 38;

pub type MapHeader = LumpDirectory<LUMP_COUNT>;
