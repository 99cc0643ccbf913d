//! Splitting path-list values.
//!
//! `std::env::split_paths` is not used here: on Windows it strips quotes,
//! which would break the verbatim round trip and the duplicate check.
//! Entries stay `OsString` so non-Unicode bytes survive on unix.

use std::ffi::{OsStr, OsString};

use crate::error::Result;

use super::env::read_variable;

/// The platform path-list delimiter.
#[cfg(windows)]
pub const DELIMITER: char = ';';

/// The platform path-list delimiter.
#[cfg(not(windows))]
pub const DELIMITER: char = ':';

/// Split a raw value into its entries.
///
/// Order, duplicates and empty segments are preserved exactly.
#[cfg(unix)]
pub fn split_entries<S: AsRef<OsStr>>(raw: S) -> Vec<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    raw.as_ref()
        .as_bytes()
        .split(|&b| b == DELIMITER as u8)
        .map(|entry| OsString::from_vec(entry.to_vec()))
        .collect()
}

/// Split a raw value into its entries.
///
/// Order, duplicates and empty segments are preserved exactly.
#[cfg(not(unix))]
pub fn split_entries<S: AsRef<OsStr>>(raw: S) -> Vec<OsString> {
    raw.as_ref()
        .to_string_lossy()
        .split(DELIMITER)
        .map(OsString::from)
        .collect()
}

/// Join entries back into a raw value. Inverse of [`split_entries`].
pub fn join_entries<S: AsRef<OsStr>>(entries: &[S]) -> OsString {
    let mut joined = OsString::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            joined.push(DELIMITER.to_string());
        }
        joined.push(entry.as_ref());
    }
    joined
}

/// The entries of one path-list environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    variable: String,
    entries: Vec<OsString>,
}

impl PathList {
    /// Read `variable` from the process environment and split it.
    pub fn from_env(variable: &str) -> Result<Self> {
        let raw = read_variable(variable)?;
        let list = Self::parse(variable, raw);
        tracing::debug!(
            "Read ${} with {} entries",
            variable,
            list.entries.len()
        );
        Ok(list)
    }

    /// Build a list from an already-read raw value.
    pub fn parse<S: AsRef<OsStr>>(variable: &str, raw: S) -> Self {
        Self {
            variable: variable.to_string(),
            entries: split_entries(raw),
        }
    }

    /// Name of the environment variable the entries came from.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Entries in their original order.
    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }

    /// Whether `candidate` is listed verbatim.
    pub fn contains<S: AsRef<OsStr>>(&self, candidate: S) -> bool {
        let candidate = candidate.as_ref();
        self.entries.iter().any(|entry| entry.as_os_str() == candidate)
    }
}
