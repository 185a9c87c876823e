//! Command implementations

pub mod check;
pub mod config;
pub mod setup;
pub mod version;

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{ConfigStore, LayoutSource};
use crate::domain::ProjectLayout;
use crate::infra::config::YamlConfigStore;

/// Load the project layout and apply the `--python` override on top.
///
/// # Errors
///
/// Returns an error if the project directory does not exist or the config
/// file is unreadable or invalid.
pub fn load_layout(
    project_dir: &Path,
    python: Option<&str>,
) -> Result<(ProjectLayout, LayoutSource)> {
    if !project_dir.is_dir() {
        anyhow::bail!("project directory not found: {}", project_dir.display());
    }
    let (mut layout, source) = YamlConfigStore::new(project_dir).load()?;
    if let Some(python) = python {
        layout.python = Some(python.to_string());
        layout.validate()?;
    }
    Ok((layout, source))
}
