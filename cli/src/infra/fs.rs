//! Filesystem infrastructure — implements `ProjectFs` against a real directory.

use std::path::{Path, PathBuf};

use crate::application::ports::ProjectFs;

/// Project directory on the local filesystem.
pub struct LocalProjectFs {
    root: PathBuf,
}

impl LocalProjectFs {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectFs for LocalProjectFs {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let joined = self.root.join(path);
        // Program paths must be absolute: relative ones resolve differently per platform.
        std::path::absolute(&joined).unwrap_or(joined)
    }
}
