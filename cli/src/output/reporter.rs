//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` starts a spinner on a TTY, otherwise prints `"  → {message}"`
/// - `success()` resolves the running spinner or prints `"  ✓ {message}"`
/// - `warn()` prints `"  ⚠ {message}"` and an indented hint
///
/// Everything is suppressed when `ctx.quiet`. A spinner still running when the
/// reporter is dropped belongs to a step that failed and is marked with `✗`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<(ProgressBar, String)>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    fn take_spinner(&self) -> Option<(ProgressBar, String)> {
        self.active.borrow_mut().take()
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        if let Some((pb, _)) = self.take_spinner() {
            pb.finish_and_clear();
        }
        if self.ctx.show_progress() {
            let pb = progress::spinner(message);
            *self.active.borrow_mut() = Some((pb, message.to_string()));
        } else {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        match self.take_spinner() {
            Some((pb, _)) => progress::finish_ok(&pb, message),
            None => println!("  {} {message}", "✓".style(self.ctx.styles.success)),
        }
    }

    fn warn(&self, message: &str, hint: Option<&str>) {
        if self.ctx.quiet {
            return;
        }
        if let Some((pb, _)) = self.take_spinner() {
            pb.finish_and_clear();
        }
        println!("  {} {message}", "⚠".style(self.ctx.styles.warning));
        if let Some(hint) = hint {
            println!("    {}", hint.style(self.ctx.styles.dim));
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        if let Some((pb, step)) = self.active.get_mut().take() {
            let step = step.trim_end_matches('.');
            progress::finish_error(&pb, &format!("{step} failed"));
        }
    }
}
