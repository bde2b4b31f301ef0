use std::io::{Read, Seek, SeekFrom};

use bspgeom_lump::{read_lump_records, BspError, LumpData, LumpKind};
use log::debug;

use crate::lump_data::{Edge, Face, Plane, SurfaceEdge, TextureInfo, Vertex};
use crate::map_header::{MapHeader, BSP_VERSION};

/// Every lump the geometry needs, decoded. Immutable once read.
#[derive(Clone, Debug)]
pub struct Level {
  pub header: MapHeader,
  pub planes: Vec<Plane>,
  pub vertices: Vec<Vertex>,
  pub texture_infos: Vec<TextureInfo>,
  pub faces: Vec<Face>,
  pub edges: Vec<Edge>,
  pub surface_edges: Vec<SurfaceEdge>,
}

pub struct Map<R: Read + Seek> {
  pub name: String,
  header: MapHeader,
  reader: R,
}

impl<R: Read + Seek> Map<R> {
  pub fn read(name: &str, mut reader: R) -> Result<Map<R>, BspError> {
    reader.seek(SeekFrom::Start(0))?;
    let header = MapHeader::read(&mut reader)?;
    header.validate(&[BSP_VERSION])?;
    debug!("Opened {}, version {}", name, header.version);
    Ok(Map {
      name: name.to_owned(),
      header,
      reader,
    })
  }

  pub fn header(&self) -> &MapHeader {
    &self.header
  }

  pub fn position(&mut self) -> Result<u64, BspError> {
    Ok(self.reader.stream_position()?)
  }

  pub fn into_inner(self) -> R {
    self.reader
  }

  pub fn read_planes(&mut self) -> Result<Vec<Plane>, BspError> {
    self.read_lump_data()
  }

  pub fn read_vertices(&mut self) -> Result<Vec<Vertex>, BspError> {
    self.read_lump_data()
  }

  pub fn read_texture_infos(&mut self) -> Result<Vec<TextureInfo>, BspError> {
    self.read_lump_data()
  }

  pub fn read_faces(&mut self) -> Result<Vec<Face>, BspError> {
    self.read_lump_data()
  }

  pub fn read_edges(&mut self) -> Result<Vec<Edge>, BspError> {
    self.read_lump_data()
  }

  pub fn read_surface_edges(&mut self) -> Result<Vec<SurfaceEdge>, BspError> {
    self.read_lump_data()
  }

  pub fn read_level(&mut self) -> Result<Level, BspError> {
    let planes = self.read_planes()?;
    let vertices = self.read_vertices()?;
    let texture_infos = self.read_texture_infos()?;
    let faces = self.read_faces()?;
    let edges = self.read_edges()?;
    let surface_edges = self.read_surface_edges()?;
    Ok(Level {
      header: self.header.clone(),
      planes,
      vertices,
      texture_infos,
      faces,
      edges,
      surface_edges,
    })
  }

  fn read_lump_data<T: LumpData>(&mut self) -> Result<Vec<T>, BspError> {
    let lump = self.header.lump(T::lump_type().index());
    read_lump_records(&mut self.reader, lump, self.header.version)
  }
}
