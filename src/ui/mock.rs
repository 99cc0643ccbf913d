//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use pathdiag::paths::Problem;
//! use pathdiag::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.path_ok("/usr/bin");
//! ui.path_problem("/opt/gone", Problem::DoesNotExist);
//!
//! assert_eq!(ui.successes(), ["/usr/bin"]);
//! assert!(ui.has_problem("/opt/gone", Problem::DoesNotExist));
//! ```

use crate::paths::Problem;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    problems: Vec<(String, Problem)>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all paths reported as healthy, in order.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all reported problems, in order.
    pub fn problems(&self) -> &[(String, Problem)] {
        &self.problems
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific problem was reported for `path`.
    pub fn has_problem(&self, path: &str, problem: Problem) -> bool {
        self.problems
            .iter()
            .any(|(p, kind)| p == path && *kind == problem)
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn path_ok(&mut self, path: &str) {
        self.successes.push(path.to_string());
    }

    fn path_problem(&mut self, path: &str, problem: Problem) {
        self.problems.push((path.to_string(), problem));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
