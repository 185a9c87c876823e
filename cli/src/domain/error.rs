//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Setup errors ──────────────────────────────────────────────────────────────

/// Fatal failures of the setup procedure.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Virtual environment creation failed: {stderr}")]
    VenvCreation { stderr: String },

    #[error("Dependency manifest not found: {path}")]
    ManifestMissing { path: String },

    #[error("Installing requirements failed: {stderr}")]
    Install { stderr: String },

    #[error("Cannot run '{program}': {reason}")]
    Spawn { program: String, reason: String },
}

impl SetupError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::VenvCreation { .. } => "venv_creation_failed",
            Self::ManifestMissing { .. } => "manifest_missing",
            Self::Install { .. } => "install_failed",
            Self::Spawn { .. } => "spawn_failed",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to project layout validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid setting {key}: must not be empty")]
    Empty { key: String },

    #[error("Invalid setting {key}: '{value}' must be relative to the project directory")]
    AbsolutePath { key: String, value: String },

    #[error("Invalid setting notebooks: at least one notebook is required")]
    NoNotebooks,
}

impl ConfigError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        "invalid_config"
    }
}

/// Machine-readable code for any error surfaced by the CLI.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<SetupError>() {
        e.code()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.code()
    } else {
        "internal"
    }
}
