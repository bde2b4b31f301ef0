use bspgeom_lump::LumpDirectory;

/// The format declares 17 lumps, but only the first 16 descriptors are read.
pub const DECLARED_LUMP_COUNT: usize = 17;
pub const LUMP_COUNT: usize = 16;

/// 46 is Quake III Arena, 47 the Team Arena / RTCW revision with identical records.
pub const BSP_VERSIONS: [i32; 2] = [46, 47];

pub type MapHeader = LumpDirectory<LUMP_COUNT>;
