//! Application service — read-only project check use-case.
//!
//! Never spawns processes and never fails on a missing file.

use std::path::Path;

use crate::application::ports::ProjectFs;
use crate::application::services::bootstrap::dataset_checks;
use crate::domain::{EnvironmentChecks, Platform, ProjectChecks, ProjectLayout, venv_commands};

/// Probe the environment, manifest and datasets of a project.
pub fn run_check(layout: &ProjectLayout, platform: Platform, fs: &impl ProjectFs) -> ProjectChecks {
    let commands = venv_commands(platform, &layout.venv_dir);
    let venv_found = fs.exists(Path::new(&layout.venv_dir));
    let pip_found = venv_found && pip_exists(platform, &commands.pip, fs);

    ProjectChecks {
        environment: EnvironmentChecks {
            venv_found,
            pip_found,
        },
        manifest_found: fs.exists(Path::new(&layout.requirements)),
        datasets: dataset_checks(layout, fs),
    }
}

fn pip_exists(platform: Platform, pip: &str, fs: &impl ProjectFs) -> bool {
    match platform {
        Platform::Windows => {
            fs.exists(Path::new(pip)) || fs.exists(Path::new(&format!("{pip}.exe")))
        }
        Platform::Posix => fs.exists(Path::new(pip)),
    }
}
