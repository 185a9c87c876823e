//! `energy-setup setup` — create the environment, install dependencies and
//! check the datasets.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProjectFs};
use crate::application::services::bootstrap::run_setup;
use crate::domain::{Platform, ProjectLayout};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalProjectFs;
use crate::output::OutputContext;
use crate::output::human::HumanRenderer;
use crate::output::reporter::TerminalReporter;

/// Run `energy-setup setup`.
///
/// # Errors
///
/// Returns an error if a fatal setup step fails.
pub async fn run(
    ctx: &OutputContext,
    json: bool,
    project_dir: &Path,
    python: Option<&str>,
) -> Result<()> {
    let (layout, _) = super::load_layout(project_dir, python)?;
    let runner = TokioCommandRunner::new(project_dir);
    let fs = LocalProjectFs::new(project_dir);
    run_with(ctx, json, &layout, Platform::current(), &runner, &fs).await
}

/// Setup with injected infrastructure.
///
/// # Errors
///
/// Returns an error if a fatal setup step fails. Next steps are only printed
/// after every fatal step succeeded.
pub async fn run_with(
    ctx: &OutputContext,
    json: bool,
    layout: &ProjectLayout,
    platform: Platform,
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
) -> Result<()> {
    let renderer = HumanRenderer::new(ctx);
    renderer.render_banner();

    let report = {
        let reporter = TerminalReporter::new(ctx);
        run_setup(layout, platform, runner, fs, &reporter).await?
    };

    if json {
        crate::output::json::print(&report)?;
    } else {
        renderer.render_setup_complete(&report);
    }
    Ok(())
}
