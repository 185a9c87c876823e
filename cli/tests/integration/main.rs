//! Integration tests for energy-setup
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They are slower and should be run separately from unit tests.

mod setup_command;

use assert_cmd::Command;

/// The binary with a clean, colorless environment.
pub fn energy_setup() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("energy-setup"));
    cmd.env("NO_COLOR", "1")
        .env_remove("ENERGY_SETUP_CONFIG")
        .env_remove("ENERGY_SETUP_PYTHON")
        .env_remove("RUST_LOG");
    cmd
}
