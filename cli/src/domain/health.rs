//! Project health types and issue collection for `energy-setup check`.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::Serialize;

use crate::domain::report::DatasetCheck;

/// Everything `energy-setup check` probes.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectChecks {
    pub environment: EnvironmentChecks,
    /// Whether the dependency manifest exists.
    pub manifest_found: bool,
    pub datasets: Vec<DatasetCheck>,
}

/// Virtual environment state.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentChecks {
    /// Whether the environment directory exists.
    pub venv_found: bool,
    /// Whether the package installer exists inside the environment.
    pub pip_found: bool,
}

/// Collect human-readable issue descriptions from check results.
#[must_use]
pub fn collect_issues(checks: &ProjectChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.environment.venv_found {
        issues.push("Virtual environment not created".to_string());
    } else if !checks.environment.pip_found {
        issues.push("Virtual environment has no package installer".to_string());
    }
    if !checks.manifest_found {
        issues.push("Dependency manifest not found".to_string());
    }
    for dataset in &checks.datasets {
        if let Some((headline, _)) = dataset.warning() {
            issues.push(headline);
        }
    }
    issues
}

// ── Unit tests ────────────────────────────────────────────────────────────────
