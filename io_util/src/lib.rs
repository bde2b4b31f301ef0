mod read_util;

pub use self::read_util::*;
