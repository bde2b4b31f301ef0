use std::env;
use std::process::ExitCode;

use bspgeom_geometry::{build_edge_wireframe, load_file, resolve_texture_slots, GeometryConfig, Level, LoadedLevel};
use log::{error, info, warn};

const WIREFRAME_DOWNSCALE: f32 = 10.0;

fn main() -> ExitCode {
  if let Err(e) = simple_logger::SimpleLogger::new().env().init() {
    eprintln!("Failed to initialize logging: {}", e);
  }

  let mut args = env::args().skip(1);
  let Some(path) = args.next() else {
    error!("Usage: bsp_inspect <file.bsp> [texture-directory]");
    return ExitCode::FAILURE;
  };
  let config = args.next().map(GeometryConfig::with_texture_directory).unwrap_or_default();

  match load_file(&path) {
    Ok(loaded) => {
      summarize(&loaded, &config);
      ExitCode::SUCCESS
    }
    Err(e) => {
      error!("Failed to load {}: {}", path, e);
      ExitCode::FAILURE
    }
  }
}

fn summarize(loaded: &LoadedLevel, config: &GeometryConfig) {
  let geometry = &loaded.geometry;
  info!(
    "{} ({:?}): {} vertices of {} floats, {} indices in {} draw ranges ({:?})",
    loaded.name,
    loaded.format,
    geometry.vertex_count(),
    geometry.layout.components(),
    geometry.indices.len(),
    geometry.draw_ranges.len(),
    geometry.topology
  );

  match &loaded.level {
    Level::Quake2(level) => {
      info!("{} planes, {} edges, {} texinfos", level.planes.len(), level.edges.len(), level.texture_infos.len());
      match build_edge_wireframe(level, WIREFRAME_DOWNSCALE) {
        Ok(wireframe) => info!("Edge wireframe: {} lines", wireframe.indices.len() / 2),
        Err(e) => warn!("Edge wireframe unavailable: {}", e),
      }
    }
    Level::Quake3(level) => {
      info!("{} faces, {} meshverts", level.faces.len(), level.mesh_verts.len());
      if config.texture_directory.is_some() {
        let slots = resolve_texture_slots(&geometry.texture_names, config);
        let resolved = slots.iter().filter(|slot| slot.is_some()).count();
        info!("Resolved {} of {} texture slots", resolved, slots.len());
      }
    }
  }
}
