//! Terminal output for path reports.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output in tests
//! - [`PathDiagTheme`] and [`StatusKind`] for line formatting
//!
//! # Example
//!
//! ```
//! use pathdiag::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Verbose, false);
//! ui.path_ok("/usr/bin");
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PathDiagTheme};

use crate::paths::Problem;

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print an unformatted line to stdout (reports, summaries).
    fn message(&mut self, msg: &str);

    /// Report a path that passed every check.
    fn path_ok(&mut self, path: &str);

    /// Report a path with a problem.
    fn path_problem(&mut self, path: &str, problem: Problem);

    /// Report a failure (rejected candidate, unset variable).
    fn error(&mut self, msg: &str);
}
