//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::{ConfigStore, LayoutSource};
use crate::domain::ProjectLayout;
use crate::domain::config::CONFIG_FILE_NAME;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ENERGY_SETUP_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore {
    project_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store for `project_dir`, honouring `ENERGY_SETUP_CONFIG` when set.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self::with_explicit(project_dir, std::env::var(CONFIG_ENV).ok())
    }

    /// Store with an explicit config path instead of the environment.
    /// Empty values count as unset.
    #[must_use]
    pub fn with_explicit(project_dir: impl Into<PathBuf>, explicit: Option<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            explicit: explicit.filter(|v| !v.trim().is_empty()).map(PathBuf::from),
        }
    }

    /// Config file that will be read, if any.
    ///
    /// An explicit path wins and must point at an existing file; relative
    /// paths are taken from the project directory. Otherwise
    /// `energy-setup.yaml` in the project directory is used when present.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit {
            return Some(self.project_dir.join(explicit));
        }
        let local = self.project_dir.join(CONFIG_FILE_NAME);
        local.is_file().then_some(local)
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<(ProjectLayout, LayoutSource)> {
        let Some(path) = self.path() else {
            tracing::debug!("no config file, using defaults");
            return Ok((ProjectLayout::default(), LayoutSource::Defaults));
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let layout: ProjectLayout = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        layout.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok((layout, LayoutSource::File(path)))
    }
}
