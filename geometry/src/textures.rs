use std::path::PathBuf;

use log::warn;

use crate::config::GeometryConfig;

/// Maps each texture name to an existing image file; the slot index is the texture index.
pub fn resolve_texture_slots(names: &[String], config: &GeometryConfig) -> Vec<Option<PathBuf>> {
  names
    .iter()
    .map(|name| {
      let path = config.texture_path(name).filter(|path| path.is_file());
      if path.is_none() {
        warn!("No image found for texture {}", name);
      }
      path
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn only_existing_files_get_a_slot() {
    let directory = tempfile::tempdir().unwrap();
    fs::create_dir_all(directory.path().join("textures/base_wall")).unwrap();
    fs::write(directory.path().join("textures/base_wall/concrete.jpg"), b"jpg").unwrap();

    let config = GeometryConfig::with_texture_directory(directory.path());
    let names = vec!["textures/base_wall/concrete".to_string(), "textures/base_wall/missing".to_string()];
    let slots = resolve_texture_slots(&names, &config);
    assert_eq!(slots, vec![Some(directory.path().join("textures/base_wall/concrete.jpg")), None]);
  }

  #[test]
  fn without_directory_nothing_resolves() {
    let slots = resolve_texture_slots(&["a".to_string()], &GeometryConfig::default());
    assert_eq!(slots, vec![None]);
  }
}
