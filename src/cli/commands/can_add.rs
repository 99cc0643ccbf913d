//! Can-add mode.
//!
//! Validates one candidate against the current list: duplicate, then
//! existence, directory and readability. The first failure is reported.

use std::ffi::{OsStr, OsString};

use serde::Serialize;

use crate::error::Result;
use crate::paths::{check_candidate, PathList};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The can-add command implementation.
pub struct CanAddCommand {
    list: PathList,
    candidate: OsString,
    json: bool,
}

/// JSON can-add report.
#[derive(Debug, Serialize)]
pub struct CanAddReport<'a> {
    pub variable: &'a str,
    pub candidate: String,
    pub accepted: bool,
    pub reason: Option<&'static str>,
    pub message: Option<String>,
}

impl CanAddCommand {
    /// Create a new can-add command.
    pub fn new(list: PathList, candidate: OsString, json: bool) -> Self {
        Self {
            list,
            candidate,
            json,
        }
    }

    /// Get the candidate path.
    pub fn candidate(&self) -> &OsStr {
        &self.candidate
    }
}

impl Command for CanAddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = check_candidate(&self.list, &self.candidate);
        let candidate_display = self.candidate.to_string_lossy();

        if self.json {
            let report = CanAddReport {
                variable: self.list.variable(),
                candidate: candidate_display.to_string(),
                accepted: outcome.is_ok(),
                reason: outcome.as_ref().err().map(|e| e.reason_code()),
                message: outcome.as_ref().err().map(ToString::to_string),
            };
            ui.message(&serde_json::to_string_pretty(&report)?);
        }

        match outcome {
            Ok(props) => {
                tracing::debug!(
                    "`{}` can be added to ${}",
                    props.absolute_path.display(),
                    self.list.variable()
                );
                if !self.json && ui.output_mode().shows_successes() {
                    ui.path_ok(&candidate_display);
                }
                Ok(CommandResult::success())
            }
            Err(rejection) => {
                tracing::debug!("Rejected `{}`: {}", candidate_display, rejection);
                if !self.json {
                    ui.error(&rejection.to_string());
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}
