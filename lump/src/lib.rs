extern crate io_util;

mod error;
mod lump;
mod lump_data;
mod lump_directory;

pub use self::io_util::*;
pub use self::error::{BspError, FormatError};
pub use self::lump::Lump;
pub use self::lump_data::{check_index, check_range, read_lump_records, LumpData, LumpKind};
pub use self::lump_directory::{read_prologue, LumpDirectory, BSP_IDENTIFIER};
