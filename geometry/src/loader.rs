use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use bspgeom_lump::{read_prologue, BspError, FormatError, BSP_IDENTIFIER};
use log::info;

use crate::bundle::GeometryBundle;
use crate::quake2_geometry::build_quake2_geometry;
use crate::quake3_geometry::build_quake3_geometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BspFormat {
  /// Version 38: planes, edges, surfedges and texture axes.
  Quake2,
  /// Versions 46 and 47: vertices with UVs, meshverts and typed faces.
  Quake3,
}

impl BspFormat {
  pub fn detect(identifier: [u8; 4], version: i32) -> Result<Self, FormatError> {
    if identifier != BSP_IDENTIFIER {
      return Err(FormatError::BadMagic { found: identifier });
    }
    if version == q2::BSP_VERSION {
      Ok(BspFormat::Quake2)
    } else if q3::BSP_VERSIONS.contains(&version) {
      Ok(BspFormat::Quake3)
    } else {
      Err(FormatError::UnsupportedVersion(version))
    }
  }
}

#[derive(Clone, Debug)]
pub enum Level {
  Quake2(q2::Level),
  Quake3(q3::Level),
}

/// Result of one load: the decoded records and the geometry built from them.
#[derive(Clone, Debug)]
pub struct LoadedLevel {
  pub name: String,
  pub format: BspFormat,
  pub level: Level,
  pub geometry: GeometryBundle,
}

/// Loads either format, picking the decoder from the header's version.
pub fn load<R: Read + Seek>(name: &str, mut reader: R) -> Result<LoadedLevel, BspError> {
  reader.seek(SeekFrom::Start(0))?;
  let (identifier, version) = read_prologue(&mut reader)?;
  match BspFormat::detect(identifier, version)? {
    BspFormat::Quake2 => load_quake2(name, reader),
    BspFormat::Quake3 => load_quake3(name, reader),
  }
}

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadedLevel, BspError> {
  let path = path.as_ref();
  let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
  let file = File::open(path)?;
  load(&name, BufReader::new(file))
}

pub fn load_quake2<R: Read + Seek>(name: &str, reader: R) -> Result<LoadedLevel, BspError> {
  let mut map = q2::Map::read(name, reader)?;
  let level = map.read_level()?;
  let geometry = build_quake2_geometry(&level)?;
  info!(
    "Loaded {}: {} vertices, {} indices, {} faces",
    name,
    geometry.vertex_count(),
    geometry.indices.len(),
    geometry.draw_ranges.len()
  );
  Ok(LoadedLevel {
    name: name.to_owned(),
    format: BspFormat::Quake2,
    level: Level::Quake2(level),
    geometry,
  })
}

pub fn load_quake3<R: Read + Seek>(name: &str, reader: R) -> Result<LoadedLevel, BspError> {
  let mut map = q3::Map::read(name, reader)?;
  let level = map.read_level()?;
  let geometry = build_quake3_geometry(&level)?;
  info!(
    "Loaded {}: {} vertices, {} indices, {} textures",
    name,
    geometry.vertex_count(),
    geometry.indices.len(),
    geometry.texture_names.len()
  );
  Ok(LoadedLevel {
    name: name.to_owned(),
    format: BspFormat::Quake3,
    level: Level::Quake3(level),
    geometry,
  })
}
