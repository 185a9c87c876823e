//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod platform;
pub mod report;

pub use config::{DatasetPaths, ProjectLayout};
pub use error::{ConfigError, SetupError, error_code};
pub use health::{EnvironmentChecks, ProjectChecks, collect_issues};
pub use platform::{Platform, VenvCommands, venv_commands};
pub use report::{DatasetCheck, DatasetKind, NextSteps, SetupReport, StepOutcome};
