//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::ports::LayoutSource;
use crate::domain::{ProjectChecks, ProjectLayout, SetupReport};
use crate::output::OutputContext;

/// Title printed above the setup and check output.
pub const PROJECT_TITLE: &str = "Energy Consumption Analysis Project";

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Banner printed before the setup steps run.
    pub fn render_banner(&self) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!("Setting up {PROJECT_TITLE}"));
        println!("  {}", "=".repeat(60).style(self.ctx.styles.dim));
    }

    /// Completion message and the next steps for the user.
    pub fn render_setup_complete(&self, report: &SetupReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.success("Setup completed successfully!");
        println!();
        self.ctx.header("Next steps:");
        println!("  1. Activate virtual environment:");
        println!("       {}", report.next_steps.activate);
        println!("  2. Launch Jupyter:");
        println!("       {}", report.next_steps.launch);
        println!("  3. Run notebooks in order:");
        for notebook in &report.next_steps.notebooks {
            println!("       - {notebook}");
        }
    }

    /// Project check results followed by the list of issues, if any.
    pub fn render_checks(&self, checks: &ProjectChecks, issues: &[String]) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!("{PROJECT_TITLE} Check"));
        println!();

        println!("  Environment:");
        self.print_check(checks.environment.venv_found, "Virtual environment present");
        if checks.environment.venv_found {
            self.print_check(checks.environment.pip_found, "Package installer present");
        }
        self.print_check(checks.manifest_found, "Dependency manifest present");
        println!();

        println!("  Data:");
        for dataset in &checks.datasets {
            self.print_check(dataset.present, &dataset.path);
        }
        println!();

        if issues.is_empty() {
            self.ctx.success("Project is ready");
        } else {
            self.ctx.warn(&format!("{} issue(s) found:", issues.len()));
            for issue in issues {
                println!("    - {issue}");
            }
            if !checks.environment.venv_found || !checks.environment.pip_found {
                self.ctx.info("Run: energy-setup setup");
            }
        }
    }

    /// Render the effective project layout and where it came from.
    pub fn render_config(&self, layout: &ProjectLayout, source: &LayoutSource) {
        if self.ctx.quiet {
            return;
        }
        println!();
        println!(
            "  {}",
            format!("Configuration ({source})").style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "venv_dir:", layout.venv_dir);
        println!("  {:<20} {}", "requirements:", layout.requirements);
        println!(
            "  {:<20} {}",
            "python:",
            layout.python.as_deref().unwrap_or("(platform default)")
        );
        println!("  {:<20} {}", "datasets.raw:", layout.datasets.raw);
        println!("  {:<20} {}", "datasets.processed:", layout.datasets.processed);
        println!("  {:<20} {}", "launch_command:", layout.launch_command);
        println!("  {}", "notebooks:".style(self.ctx.styles.bold));
        for notebook in &layout.notebooks {
            println!("    - {notebook}");
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [
            "ENERGY_SETUP_CONFIG",
            "ENERGY_SETUP_PYTHON",
            "NO_COLOR",
        ] {
            println!(
                "    {:<22} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "✓".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "✗".style(self.ctx.styles.error));
        }
    }
}
