//! Error types for pathdiag operations.
//!
//! This module defines [`PathDiagError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every rejection a check can produce is its own variant so callers can
//!   match on the reason instead of parsing messages
//! - All errors are caught in `main` and mapped to exit code 1
//! - Messages are written for the user, not for a developer

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pathdiag operations.
#[derive(Debug, Error)]
pub enum PathDiagError {
    /// The inspected environment variable is not set.
    #[error("Environment variable `{name}` not found")]
    VariableNotSet { name: String },

    /// Candidate path does not exist.
    #[error("Path `{}` does not exist", .path.display())]
    PathNotFound { path: PathBuf },

    /// Candidate path exists but is not a directory.
    #[error("Path `{}` is not a directory", .path.display())]
    PathNotDirectory { path: PathBuf },

    /// Candidate path is a directory the current user cannot read.
    #[error("Path `{}` is not accessible by the current user", .path.display())]
    PathNotReadable { path: PathBuf },

    /// Candidate path is already listed in the variable.
    #[error("Path already in ${variable} variable")]
    PathAlreadyPresent { variable: String, path: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a JSON report.
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathDiagError {
    /// Machine-readable reason code used in JSON reports.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::VariableNotSet { .. } => "variable_not_set",
            Self::PathNotFound { .. } => "does_not_exist",
            Self::PathNotDirectory { .. } => "not_a_directory",
            Self::PathNotReadable { .. } => "not_readable",
            Self::PathAlreadyPresent { .. } => "already_present",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

/// Result type alias for pathdiag operations.
pub type Result<T> = std::result::Result<T, PathDiagError>;
