//! Integration tests for `energy-setup setup` against a real project directory.
//!
//! The virtual environment is faked with a shell script standing in for
//! `pip`, so no interpreter or network is needed.

#![allow(clippy::expect_used)]

use std::path::Path;

use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

use crate::energy_setup;

/// Project with `requirements.txt` and a `.venv/bin/pip` running `body`.
#[cfg(unix)]
fn project_with_pip(body: &str) -> TempDir {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("requirements.txt"), "pandas\nscikit-learn\n").expect("write");
    let bin = dir.path().join(".venv/bin");
    std::fs::create_dir_all(&bin).expect("mkdir");
    let pip = bin.join("pip");
    std::fs::write(&pip, format!("#!/bin/sh\n{body}\n")).expect("write pip");
    std::fs::set_permissions(&pip, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    dir
}

#[cfg(unix)]
fn add_datasets(root: &Path) {
    std::fs::create_dir_all(root.join("data/processed")).expect("mkdir");
    std::fs::write(root.join("data/Energy_consumption.csv"), "ts,kwh\n").expect("write");
    std::fs::write(root.join("data/processed/energy_data_processed.csv"), "ts,kwh\n")
        .expect("write");
}

#[test]
fn test_setup_missing_interpreter_fails_with_exit_one() {
    let dir = TempDir::new().expect("temp dir");
    energy_setup()
        .args(["setup", "--python", "definitely-not-a-python-xyz", "-C"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Cannot run 'definitely-not-a-python-xyz'",
        ))
        .stdout(predicate::str::contains("Next steps").not());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_existing_venv_without_data_warns_and_succeeds() {
    let dir = project_with_pip("echo 'Requirement already satisfied: pandas'");
    energy_setup()
        .arg("-C")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Virtual environment already exists"))
        .stdout(predicate::str::contains(
            "Installing requirements completed successfully",
        ))
        .stdout(predicate::str::contains(
            "Warning: Original dataset not found in data/ directory",
        ))
        .stdout(predicate::str::contains("Warning: Processed data not found"))
        .stdout(predicate::str::contains("Setup completed successfully!"))
        .stdout(predicate::str::contains("source .venv/bin/activate"))
        .stdout(predicate::str::contains("jupyter notebook"))
        .stdout(predicate::str::contains("01_data_exploration.ipynb"));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_passes_manifest_to_pip() {
    let dir = project_with_pip("echo \"$@\" > pip-args.txt");
    add_datasets(dir.path());
    energy_setup()
        .args(["setup", "-q", "-C"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let args = std::fs::read_to_string(dir.path().join("pip-args.txt")).expect("pip ran");
    assert_eq!(args.trim(), "install -r requirements.txt");
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_install_failure_exits_one_before_next_steps() {
    let dir = project_with_pip("echo 'ERROR: ResolutionImpossible' >&2; exit 1");
    energy_setup()
        .args(["setup", "-C"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Installing requirements failed: ERROR: ResolutionImpossible",
        ))
        .stdout(predicate::str::contains("Next steps").not())
        .stdout(predicate::str::contains("Warning:").not());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_install_failure_json_error_code() {
    let dir = project_with_pip("exit 1");
    let output = energy_setup()
        .args(["setup", "--json", "-C"])
        .arg(dir.path())
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["code"], "install_failed");
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_json_report() {
    let dir = project_with_pip("true");
    add_datasets(dir.path());
    let output = energy_setup()
        .args(["setup", "--json", "-C"])
        .arg(dir.path())
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["platform"], "posix");
    assert_eq!(value["venv"], "already_present");
    assert_eq!(value["install"], "completed");
    assert_eq!(value["next_steps"]["activate"], "source .venv/bin/activate");
    assert_eq!(value["next_steps"]["notebooks"].as_array().map(Vec::len), Some(5));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_twice_is_idempotent() {
    let dir = project_with_pip("echo run >> pip-runs.txt");
    for _ in 0..2 {
        energy_setup()
            .args(["setup", "-C"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Virtual environment already exists"));
    }
    let runs = std::fs::read_to_string(dir.path().join("pip-runs.txt")).expect("pip ran");
    assert_eq!(runs.lines().count(), 2);
    assert!(dir.path().join("requirements.txt").exists());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_missing_manifest_fails() {
    let dir = project_with_pip("true");
    std::fs::remove_file(dir.path().join("requirements.txt")).expect("remove");
    energy_setup()
        .args(["setup", "-C"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Dependency manifest not found: requirements.txt",
        ));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_piped_output_prints_step_lines() {
    let dir = project_with_pip("true");
    energy_setup()
        .args(["setup", "-C"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Virtual environment already exists"))
        .stdout(predicate::str::contains("  → Installing requirements..."))
        .stdout(predicate::str::contains(
            "  ✓ Installing requirements completed successfully",
        ))
        .stdout(predicate::str::contains(
            "  ⚠ Warning: Original dataset not found in data/ directory\n    Please ensure Energy_consumption.csv is in the data/ folder",
        ))
        .stdout(predicate::str::contains(
            "  ⚠ Warning: Processed data not found\n    Please run the feature engineering notebook first",
        ));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_quiet_with_missing_datasets_prints_nothing() {
    let dir = project_with_pip("echo 'Successfully installed pandas'");
    energy_setup()
        .args(["setup", "-q", "-C"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_setup_quiet_still_reports_fatal_error() {
    let dir = project_with_pip("echo 'ERROR: No matching distribution' >&2; exit 1");
    energy_setup()
        .args(["setup", "-q", "-C"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "✗ Error: Installing requirements failed: ERROR: No matching distribution",
        ));
}
