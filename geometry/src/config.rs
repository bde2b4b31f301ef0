use std::path::{Path, PathBuf};

/// Where texture images for a level are looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometryConfig {
  pub texture_directory: Option<PathBuf>,
  pub texture_extension: String,
}

impl Default for GeometryConfig {
  fn default() -> Self {
    Self {
      texture_directory: None,
      texture_extension: "jpg".to_string(),
    }
  }
}

impl GeometryConfig {
  pub fn with_texture_directory<P: AsRef<Path>>(directory: P) -> Self {
    Self {
      texture_directory: Some(directory.as_ref().to_path_buf()),
      ..Default::default()
    }
  }

  /// `<texture_directory>/<name>.<extension>`, if a directory is configured.
  pub fn texture_path(&self, name: &str) -> Option<PathBuf> {
    self.texture_directory.as_ref().map(|directory| directory.join(format!("{}.{}", name, self.texture_extension)))
  }
}
