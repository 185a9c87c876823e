//! Domain types and validators for the project layout.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_VENV_DIR: &str = ".venv";
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
pub const DEFAULT_RAW_DATASET: &str = "data/Energy_consumption.csv";
pub const DEFAULT_PROCESSED_DATASET: &str = "data/processed/energy_data_processed.csv";
pub const DEFAULT_LAUNCH_COMMAND: &str = "jupyter notebook";
pub const DEFAULT_NOTEBOOKS: &[&str] = &[
    "01_data_exploration.ipynb",
    "02_feature_engineering.ipynb",
    "03_model_development.ipynb",
    "04_model_evaluation.ipynb",
    "05_business_insights.ipynb",
];

/// File name looked up in the project directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "energy-setup.yaml";

// ── Config schema ────────────────────────────────────────────────────────────

/// Project layout, optionally read from `energy-setup.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Virtual environment directory.
    pub venv_dir: String,
    /// Dependency manifest passed to `pip install -r`.
    pub requirements: String,
    /// Interpreter used to create the environment. `None` picks the
    /// platform default.
    pub python: Option<String>,
    /// Dataset files checked after installation.
    pub datasets: DatasetPaths,
    /// Command that launches the notebook server.
    pub launch_command: String,
    /// Notebooks in the order they should be run.
    pub notebooks: Vec<String>,
}

/// Locations of the raw and processed datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetPaths {
    pub raw: String,
    pub processed: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            requirements: DEFAULT_REQUIREMENTS.to_string(),
            python: None,
            datasets: DatasetPaths::default(),
            launch_command: DEFAULT_LAUNCH_COMMAND.to_string(),
            notebooks: DEFAULT_NOTEBOOKS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            raw: DEFAULT_RAW_DATASET.to_string(),
            processed: DEFAULT_PROCESSED_DATASET.to_string(),
        }
    }
}

impl ProjectLayout {
    /// Check that every path is relative and non-empty and that at least one
    /// notebook is listed.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("venv_dir", &self.venv_dir),
            ("requirements", &self.requirements),
            ("datasets.raw", &self.datasets.raw),
            ("datasets.processed", &self.datasets.processed),
        ] {
            validate_relative_path(key, value)?;
        }
        if self.python.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(ConfigError::Empty {
                key: "python".to_string(),
            });
        }
        if self.launch_command.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: "launch_command".to_string(),
            });
        }
        if self.notebooks.is_empty() {
            return Err(ConfigError::NoNotebooks);
        }
        Ok(())
    }
}

fn validate_relative_path(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty {
            key: key.to_string(),
        });
    }
    // Drive-letter and UNC forms are rejected on every host, not just Windows.
    let is_absolute = value.starts_with('/')
        || value.starts_with('\\')
        || value.as_bytes().get(1) == Some(&b':');
    if is_absolute {
        return Err(ConfigError::AbsolutePath {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
