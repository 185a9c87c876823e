//! Application service — environment bootstrap use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter, ProjectFs};
use crate::domain::{
    DatasetCheck, DatasetKind, NextSteps, Platform, ProjectLayout, SetupError, SetupReport,
    StepOutcome, VenvCommands, venv_commands,
};

/// Run the setup procedure: create the environment, install dependencies,
/// check datasets and assemble the next steps.
///
/// Steps run strictly in order. Environment creation and dependency
/// installation are fatal on failure; missing datasets only warn. No
/// `SetupReport` is produced for a failed run.
///
/// # Errors
///
/// Returns a [`SetupError`] (wrapped in `anyhow`) when the environment
/// cannot be created, the manifest is missing, the installer fails, or a
/// program cannot be spawned.
pub async fn run_setup(
    layout: &ProjectLayout,
    platform: Platform,
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
    reporter: &impl ProgressReporter,
) -> Result<SetupReport> {
    let venv = ensure_venv(layout, platform, runner, fs, reporter).await?;
    let commands = venv_commands(platform, &layout.venv_dir);
    let install = install_requirements(layout, &commands, runner, fs, reporter).await?;
    let datasets = check_datasets(layout, fs, reporter);

    tracing::info!(%platform, ?venv, ?install, "setup finished");

    Ok(SetupReport {
        platform,
        venv,
        install,
        next_steps: NextSteps::new(&commands, layout),
        commands,
        datasets,
    })
}

/// Probe both datasets and emit a warning for each missing one.
pub fn check_datasets(
    layout: &ProjectLayout,
    fs: &impl ProjectFs,
    reporter: &impl ProgressReporter,
) -> Vec<DatasetCheck> {
    let datasets = dataset_checks(layout, fs);
    for dataset in &datasets {
        if let Some((headline, hint)) = dataset.warning() {
            reporter.warn(&format!("Warning: {headline}"), Some(&hint));
        }
    }
    datasets
}

/// Presence of the raw and processed datasets, without reporting.
pub fn dataset_checks(layout: &ProjectLayout, fs: &impl ProjectFs) -> Vec<DatasetCheck> {
    [
        (DatasetKind::Raw, &layout.datasets.raw),
        (DatasetKind::Processed, &layout.datasets.processed),
    ]
    .into_iter()
    .map(|(kind, path)| DatasetCheck {
        kind,
        path: path.clone(),
        present: fs.exists(Path::new(path)),
    })
    .collect()
}

// ── Steps ─────────────────────────────────────────────────────────────────────

async fn ensure_venv(
    layout: &ProjectLayout,
    platform: Platform,
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    if fs.exists(Path::new(&layout.venv_dir)) {
        reporter.success("Virtual environment already exists");
        return Ok(StepOutcome::AlreadyPresent);
    }

    let python = layout
        .python
        .as_deref()
        .unwrap_or_else(|| platform.default_python());
    reporter.step("Creating virtual environment...");
    let output = spawn(runner, python, &["-m", "venv", &layout.venv_dir]).await?;
    if !output.status.success() {
        return Err(SetupError::VenvCreation {
            stderr: failure_text(&output),
        }
        .into());
    }
    reporter.success("Virtual environment creation completed successfully");
    Ok(StepOutcome::Created)
}

async fn install_requirements(
    layout: &ProjectLayout,
    commands: &VenvCommands,
    runner: &impl CommandRunner,
    fs: &impl ProjectFs,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    if !fs.exists(Path::new(&layout.requirements)) {
        return Err(SetupError::ManifestMissing {
            path: layout.requirements.clone(),
        }
        .into());
    }

    let pip = fs.resolve(Path::new(&commands.pip));
    let pip = pip.to_string_lossy();
    reporter.step("Installing requirements...");
    let output = spawn(runner, &pip, &["install", "-r", &layout.requirements]).await?;
    if !output.status.success() {
        return Err(SetupError::Install {
            stderr: failure_text(&output),
        }
        .into());
    }
    reporter.success("Installing requirements completed successfully");
    Ok(StepOutcome::Completed)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

async fn spawn(runner: &impl CommandRunner, program: &str, args: &[&str]) -> Result<Output> {
    runner.run(program, args).await.map_err(|e| {
        anyhow::Error::from(SetupError::Spawn {
            program: program.to_string(),
            reason: format!("{e:#}"),
        })
    })
}

/// Text shown for a failed command: stderr, else stdout, else the status.
fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        return stdout.trim().to_string();
    }
    output.status.to_string()
}
