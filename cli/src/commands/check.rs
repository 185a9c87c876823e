//! `energy-setup check` — report project readiness without changing anything.

use std::path::Path;

use anyhow::Result;

use crate::application::services::project_check::run_check;
use crate::domain::{Platform, collect_issues};
use crate::infra::fs::LocalProjectFs;
use crate::output::OutputContext;
use crate::output::human::HumanRenderer;

/// Run `energy-setup check`. Missing files are reported, never fatal.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or JSON output fails.
pub fn run(ctx: &OutputContext, json: bool, project_dir: &Path, python: Option<&str>) -> Result<()> {
    let (layout, _) = super::load_layout(project_dir, python)?;
    let fs = LocalProjectFs::new(project_dir);
    let checks = run_check(&layout, Platform::current(), &fs);
    let issues = collect_issues(&checks);

    if json {
        let status = if issues.is_empty() { "ready" } else { "incomplete" };
        return crate::output::json::print(&serde_json::json!({
            "status": status,
            "checks": checks,
            "issues": issues,
        }));
    }

    HumanRenderer::new(ctx).render_checks(&checks, &issues);
    Ok(())
}
