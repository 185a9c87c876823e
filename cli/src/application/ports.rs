//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::domain::ProjectLayout;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Commands run to completion in the project directory; there is no timeout.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its stdout, stderr and exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    /// A non-zero exit is NOT an error; inspect `Output::status`.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message with an optional follow-up hint.
    fn warn(&self, message: &str, hint: Option<&str>);
}

// ── Filesystem Ports ──────────────────────────────────────────────────────────

/// Read-only view of the project directory.
///
/// Paths passed in are relative to the project root.
pub trait ProjectFs {
    /// Whether the path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
    /// Absolute form of a project-relative path, used to locate executables.
    fn resolve(&self, path: &Path) -> std::path::PathBuf;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Where the effective project layout came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// Built-in defaults, no file found.
    Defaults,
    /// Loaded from this file.
    File(std::path::PathBuf),
}

impl std::fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defaults => f.write_str("built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Abstracts loading the project layout.
pub trait ConfigStore {
    /// Load the layout and report where it came from.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<(ProjectLayout, LayoutSource)>;
}
