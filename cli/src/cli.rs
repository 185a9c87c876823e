//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands;
use crate::output::OutputContext;

/// Bootstrap the Energy Consumption Analysis notebook environment
#[derive(Parser)]
#[command(name = "energy-setup", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Interpreter used to create the virtual environment
    #[arg(long, global = true, env = "ENERGY_SETUP_PYTHON")]
    pub python: Option<String>,

    /// Defaults to `setup`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the virtual environment, install requirements and check data
    Setup,

    /// Report project readiness without changing anything
    Check,

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            project_dir,
            python,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet || json);
        let python = python.as_deref();
        match command.unwrap_or(Command::Setup) {
            Command::Setup => commands::setup::run(&ctx, json, &project_dir, python).await,
            Command::Check => commands::check::run(&ctx, json, &project_dir, python),
            Command::Config => commands::config::run(&ctx, json, &project_dir, python),
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
