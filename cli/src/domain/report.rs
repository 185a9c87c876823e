//! Result types produced by the setup procedure.

use serde::Serialize;

use crate::domain::config::ProjectLayout;
use crate::domain::platform::{Platform, VenvCommands};

/// How a setup step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step did the work (e.g. created the environment).
    Created,
    /// Nothing to do, the artifact was already there.
    AlreadyPresent,
    /// A command ran to completion.
    Completed,
}

/// Which dataset a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Raw,
    Processed,
}

/// Presence of one dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetCheck {
    pub kind: DatasetKind,
    pub path: String,
    pub present: bool,
}

impl DatasetCheck {
    /// Warning headline and follow-up hint for a missing dataset, or `None`
    /// when the file is present.
    #[must_use]
    pub fn warning(&self) -> Option<(String, String)> {
        if self.present {
            return None;
        }
        let warning = match self.kind {
            DatasetKind::Raw => {
                let file = file_name(&self.path);
                let dir = parent_dir(&self.path);
                (
                    format!("Original dataset not found in {dir} directory"),
                    format!("Please ensure {file} is in the {dir} folder"),
                )
            }
            DatasetKind::Processed => (
                "Processed data not found".to_string(),
                "Please run the feature engineering notebook first".to_string(),
            ),
        };
        Some(warning)
    }
}

/// What the user should do once setup succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    /// Platform-appropriate activation command.
    pub activate: String,
    /// Command that starts the notebook server.
    pub launch: String,
    /// Notebooks in run order.
    pub notebooks: Vec<String>,
}

impl NextSteps {
    #[must_use]
    pub fn new(commands: &VenvCommands, layout: &ProjectLayout) -> Self {
        Self {
            activate: commands.activate.clone(),
            launch: layout.launch_command.clone(),
            notebooks: layout.notebooks.clone(),
        }
    }
}

/// Everything a successful setup run found and did.
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub platform: Platform,
    pub venv: StepOutcome,
    pub install: StepOutcome,
    pub commands: VenvCommands,
    pub datasets: Vec<DatasetCheck>,
    pub next_steps: NextSteps,
}

impl SetupReport {
    /// Number of advisory warnings raised during the run.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.datasets.iter().filter(|d| !d.present).count()
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn parent_dir(path: &str) -> String {
    match path.rfind(['/', '\\']) {
        Some(idx) => format!("{}/", &path[..idx]),
        None => "./".to_string(),
    }
}
