//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::paths::Problem;

use super::{OutputMode, PathDiagTheme, UserInterface};

/// UI writing report lines to the process streams.
///
/// Healthy paths and reports go to stdout, problems to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PathDiagTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, theme: PathDiagTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    /// Get the theme in use.
    pub fn theme(&self) -> &PathDiagTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn path_ok(&mut self, path: &str) {
        writeln!(self.out, "{}", self.theme.format_path_ok(path)).ok();
    }

    fn path_problem(&mut self, path: &str, problem: Problem) {
        writeln!(self.err, "{}", self.theme.format_path_problem(path, problem)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for a run.
///
/// `colors` is the capability resolved by [`should_use_colors`](super::should_use_colors).
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, PathDiagTheme::new(colors)))
}
