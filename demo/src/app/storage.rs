use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Per-user directories of the application.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Option<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "Optflow", application);
    Self { project_directories }
  }

  pub fn local_data_directory(&self) -> Option<&Path> {
    self.project_directories.as_ref().map(|d| d.data_local_dir())
  }

  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Option<PathBuf> {
    self.local_data_directory().map(|d| d.join(file_path))
  }
}
