//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing modes
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed flags to a mode

use crate::cli::args::Cli;
use crate::error::Result;
use crate::paths::PathList;
use crate::ui::UserInterface;

use super::can_add::CanAddCommand;
use super::completions::CompletionsCommand;
use super::doctor::DoctorCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for report output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether every check passed.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes the parsed command line to doctor, can-add or completions.
pub struct CommandDispatcher {
    variable: String,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given environment variable.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Get the inspected variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Dispatch and execute a command.
    ///
    /// The variable is read before any path is inspected, so an unset
    /// variable fails with [`VariableNotSet`](crate::PathDiagError::VariableNotSet)
    /// and no filesystem access. An empty `--can-add` value runs doctor mode.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute(ui);
        }

        let list = PathList::from_env(&self.variable)?;

        match cli.candidate.as_deref().filter(|c| !c.is_empty()) {
            Some(candidate) => {
                let cmd = CanAddCommand::new(list, candidate.to_os_string(), cli.json);
                cmd.execute(ui)
            }
            None => {
                let cmd = DoctorCommand::new(list, cli.json);
                cmd.execute(ui)
            }
        }
    }
}
