use std::io::{Read, Seek, SeekFrom};

use bspgeom_lump::{read_lump_records, BspError, LumpData, LumpKind};
use log::debug;

use crate::lump_data::{Face, MeshVert, Texture, Vertex};
use crate::map_header::{MapHeader, BSP_VERSIONS};

#[derive(Clone, Debug)]
pub struct Level {
  pub header: MapHeader,
  pub textures: Vec<Texture>,
  pub vertices: Vec<Vertex>,
  pub mesh_verts: Vec<MeshVert>,
  pub faces: Vec<Face>,
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
    header.validate(&BSP_VERSIONS)?;
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

  pub fn read_textures(&mut self) -> Result<Vec<Texture>, BspError> {
    self.read_lump_data()
  }

  pub fn read_vertices(&mut self) -> Result<Vec<Vertex>, BspError> {
    self.read_lump_data()
  }

  pub fn read_mesh_verts(&mut self) -> Result<Vec<MeshVert>, BspError> {
    self.read_lump_data()
  }

  pub fn read_faces(&mut self) -> Result<Vec<Face>, BspError> {
    self.read_lump_data()
  }

  pub fn read_level(&mut self) -> Result<Level, BspError> {
    let textures = self.read_textures()?;
    let vertices = self.read_vertices()?;
    let mesh_verts = self.read_mesh_verts()?;
    let faces = self.read_faces()?;
    Ok(Level {
      header: self.header.clone(),
      textures,
      vertices,
      mesh_verts,
      faces,
    })
  }

  fn read_lump_data<T: LumpData>(&mut self) -> Result<Vec<T>, BspError> {
    let lump = self.header.lump(T::lump_type().index());
    read_lump_records(&mut self.reader, lump, self.header.version)
  }
}
