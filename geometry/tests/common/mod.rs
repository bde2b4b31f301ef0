#![allow(dead_code)]

//! Writes small synthetic BSP files for the loader tests.

pub const Q2_PLANES: usize = 1;
pub const Q2_VERTICES: usize = 2;
pub const Q2_TEXINFO: usize = 5;
pub const Q2_FACES: usize = 6;
pub const Q2_EDGES: usize = 11;
pub const Q2_SURFEDGES: usize = 12;

pub const Q3_TEXTURES: usize = 1;
pub const Q3_VERTICES: usize = 10;
pub const Q3_MESHVERTS: usize = 11;
pub const Q3_FACES: usize = 13;

#[derive(Default)]
pub struct Records(pub Vec<u8>);

impl Records {
  pub fn i16(mut self, value: i16) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn i32(mut self, value: i32) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn f32(mut self, value: f32) -> Self {
    self.0.extend_from_slice(&value.to_le_bytes());
    self
  }

  pub fn bytes(mut self, value: &[u8]) -> Self {
    self.0.extend_from_slice(value);
    self
  }

  pub fn name(self, name: &str, length: usize) -> Self {
    let mut bytes = name.as_bytes().to_vec();
    bytes.resize(length, 0);
    self.bytes(&bytes)
  }

  pub fn append(mut self, other: Records) -> Self {
    self.0.extend_from_slice(&other.0);
    self
  }
}

pub struct BspWriter {
  magic: [u8; 4],
  version: i32,
  lumps: Vec<Vec<u8>>,
}

impl BspWriter {
  pub fn quake2() -> Self {
    Self {
      magic: *b"IBSP",
      version: 38,
      lumps: vec![Vec::new(); 19],
    }
  }

  pub fn quake3() -> Self {
    Self {
      magic: *b"IBSP",
      version: 46,
      lumps: vec![Vec::new(); 16],
    }
  }

  pub fn magic(mut self, magic: &[u8; 4]) -> Self {
    self.magic = *magic;
    self
  }

  pub fn version(mut self, version: i32) -> Self {
    self.version = version;
    self
  }

  pub fn lump(mut self, index: usize, records: Records) -> Self {
    self.lumps[index] = records.0;
    self
  }

  fn header_size(&self) -> usize {
    8 + self.lumps.len() * 8
  }

  /// Offset and length the lump will have in the built file.
  pub fn lump_range(&self, index: usize) -> (usize, usize) {
    let offset = self.header_size() + self.lumps[..index].iter().map(|lump| lump.len()).sum::<usize>();
    (offset, self.lumps[index].len())
  }

  pub fn build(&self) -> Vec<u8> {
    let mut bytes = self.magic.to_vec();
    bytes.extend_from_slice(&self.version.to_le_bytes());
    for index in 0..self.lumps.len() {
      let (offset, length) = self.lump_range(index);
      bytes.extend_from_slice(&(offset as i32).to_le_bytes());
      bytes.extend_from_slice(&(length as i32).to_le_bytes());
    }
    for lump in &self.lumps {
      bytes.extend_from_slice(lump);
    }
    bytes
  }
}

pub fn q2_vertices(positions: &[[f32; 3]]) -> Records {
  positions.iter().fold(Records::default(), |records, [a, b, c]| records.f32(*a).f32(*b).f32(*c))
}

pub fn q2_edges(edges: &[[i16; 2]]) -> Records {
  edges.iter().fold(Records::default(), |records, [first, second]| records.i16(*first).i16(*second))
}

pub fn q2_surfedges(surfedges: &[i32]) -> Records {
  surfedges.iter().fold(Records::default(), |records, surfedge| records.i32(*surfedge))
}

pub fn q2_texinfo(u_axis: [f32; 3], u_offset: f32, v_axis: [f32; 3], v_offset: f32, name: &str) -> Records {
  Records::default()
    .f32(u_axis[0])
    .f32(u_axis[1])
    .f32(u_axis[2])
    .f32(u_offset)
    .f32(v_axis[0])
    .f32(v_axis[1])
    .f32(v_axis[2])
    .f32(v_offset)
    .i32(0)
    .i32(0)
    .name(name, 32)
    .i32(-1)
}

pub fn q2_face(first_edge: i32, edges_count: i16, texinfo: i16) -> Records {
  Records::default()
    .i16(0)
    .i16(0)
    .i32(first_edge)
    .i16(edges_count)
    .i16(texinfo)
    .bytes(&[0, 255, 255, 255])
    .i32(-1)
}

pub fn q2_plane(normal: [f32; 3], dist: f32) -> Records {
  Records::default().f32(normal[0]).f32(normal[1]).f32(normal[2]).f32(dist).i32(0)
}

pub fn q3_texture(name: &str) -> Records {
  Records::default().name(name, 64).i32(0).i32(1)
}

pub fn q3_vertex(position: [f32; 3], uv: [f32; 2], color: [u8; 4]) -> Records {
  Records::default()
    .f32(position[0])
    .f32(position[1])
    .f32(position[2])
    .f32(uv[0])
    .f32(uv[1])
    .f32(0.0)
    .f32(0.0)
    .f32(0.0)
    .f32(0.0)
    .f32(1.0)
    .bytes(&color)
}

pub fn q3_meshverts(offsets: &[i32]) -> Records {
  offsets.iter().fold(Records::default(), |records, offset| records.i32(*offset))
}

pub fn q3_face(face_type: i32, texture: i32, vertex: i32, vertex_count: i32, mesh_vert: i32, mesh_vert_count: i32) -> Records {
  let mut records = Records::default()
    .i32(texture)
    .i32(-1)
    .i32(face_type)
    .i32(vertex)
    .i32(vertex_count)
    .i32(mesh_vert)
    .i32(mesh_vert_count)
    .i32(0)
    .i32(0)
    .i32(0)
    .i32(0)
    .i32(0);
  for _ in 0..12 {
    records = records.f32(0.0);
  }
  records.i32(0).i32(0)
}

/// A unit quad in the XY plane as FormatA stores it: edge 0 is the unused
/// placeholder, edges 1 to 4 walk the outline.
pub fn q2_quad() -> BspWriter {
  // Stored (a, b, c) becomes (x = b, y = -c, z = a).
  let vertices = [[0.0, 0.0, 0.0], [0.0, 64.0, 0.0], [0.0, 64.0, -64.0], [0.0, 0.0, -64.0]];
  BspWriter::quake2()
    .lump(Q2_PLANES, q2_plane([0.0, 0.0, 1.0], 0.0))
    .lump(Q2_VERTICES, q2_vertices(&vertices))
    .lump(Q2_TEXINFO, q2_texinfo([1.0, 0.0, 0.0], 0.0, [0.0, 1.0, 0.0], 0.0, "e1u1/grnx2_9"))
    .lump(Q2_FACES, q2_face(0, 4, 0))
    .lump(Q2_EDGES, q2_edges(&[[0, 0], [0, 1], [1, 2], [2, 3], [3, 0]]))
    .lump(Q2_SURFEDGES, q2_surfedges(&[1, 2, 3, 4]))
}
