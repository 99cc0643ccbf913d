//! pathdiag - Diagnose paths in path-list environment variables.
//!
//! pathdiag reads a variable such as `PATH`, splits it on the platform
//! delimiter and reports entries that are missing, not directories, or not
//! readable. It can also check whether a new path could be appended safely.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, doctor and can-add modes
//! - [`error`] - Error types and result aliases
//! - [`paths`] - Reading, splitting, inspecting and validating entries
//! - [`ui`] - Report output, theme and color handling
//!
//! # Example
//!
//! ```
//! use pathdiag::paths::{check_candidate, PathList};
//! use pathdiag::PathDiagError;
//!
//! let list = PathList::parse("PATH", "/usr/bin");
//! let err = check_candidate(&list, "/usr/bin").unwrap_err();
//! assert!(matches!(err, PathDiagError::PathAlreadyPresent { .. }));
//! ```

pub mod cli;
pub mod error;
pub mod paths;
pub mod ui;

pub use error::{PathDiagError, Result};
