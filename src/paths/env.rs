//! Environment variable access.

use std::ffi::OsString;

use crate::error::{PathDiagError, Result};

/// Read the raw value of the environment variable `name`.
///
/// Returns [`PathDiagError::VariableNotSet`] when the variable is absent.
/// The value is returned as-is; bytes that are not valid Unicode are kept
/// so every entry still names the directory it points at.
pub fn read_variable(name: &str) -> Result<OsString> {
    std::env::var_os(name).ok_or_else(|| PathDiagError::VariableNotSet {
        name: name.to_string(),
    })
}
