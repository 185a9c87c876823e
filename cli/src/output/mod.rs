//! Terminal output: styling, progress reporting and renderers.
//!
//! Progress and results go to stdout; fatal errors go to stderr and are the
//! only thing `--quiet` lets through.

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Whether output should be colored.
///
/// Colors need a TTY and are off when `--no-color` is given or `NO_COLOR`
/// holds a non-empty value.
#[must_use]
pub fn colors_enabled(no_color: bool, is_tty: bool, no_color_env: Option<&str>) -> bool {
    is_tty && !no_color && no_color_env.is_none_or(str::is_empty)
}

/// Styling and terminal state shared by the renderers and the reporter.
pub struct OutputContext {
    pub styles: Styles,
    /// stdout is a terminal; spinners are only drawn there.
    pub is_tty: bool,
    /// Only errors are printed.
    pub quiet: bool,
}

impl OutputContext {
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let env = std::env::var("NO_COLOR").ok();

        let mut styles = Styles::default();
        if colors_enabled(no_color, is_tty, env.as_deref()) {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Spinners run only on an interactive, non-quiet terminal.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// `✓ msg` on stdout.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// `⚠ msg` on stdout.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// `✗ msg` on stderr, printed even when quiet.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// `ℹ msg` on stdout.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }
}
