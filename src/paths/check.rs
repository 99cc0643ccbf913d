//! Classification of inspected entries.
//!
//! Problems are reported in a fixed priority: does-not-exist, then
//! not-a-directory, then not-readable. Only the first one applies.

use std::ffi::OsStr;
use std::fmt;

use serde::Serialize;

use crate::error::{PathDiagError, Result};

use super::inspect::{inspect, PathProperties};
use super::list::PathList;

/// The first problem found with a path entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// Nothing exists at the path.
    DoesNotExist,
    /// The path exists but is not a directory.
    NotADirectory,
    /// The directory cannot be read by the current user.
    NotReadable,
}

impl Problem {
    /// Human-readable reason, completing "Path `x` ...".
    pub fn description(self) -> &'static str {
        match self {
            Self::DoesNotExist => "does not exist",
            Self::NotADirectory => "is not a directory",
            Self::NotReadable => "is not accessible by the current user",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Return the highest-priority problem with `props`, if any.
pub fn diagnose(props: &PathProperties) -> Option<Problem> {
    if !props.exists {
        Some(Problem::DoesNotExist)
    } else if !props.is_directory {
        Some(Problem::NotADirectory)
    } else if !props.is_readable {
        Some(Problem::NotReadable)
    } else {
        None
    }
}

/// Check whether `candidate` can be added to `list`.
///
/// Duplicates are rejected before the filesystem is consulted.
pub fn check_candidate<S: AsRef<OsStr>>(list: &PathList, candidate: S) -> Result<PathProperties> {
    let candidate = candidate.as_ref();
    if list.contains(candidate) {
        return Err(PathDiagError::PathAlreadyPresent {
            variable: list.variable().to_string(),
            path: candidate.to_string_lossy().into_owned(),
        });
    }

    let props = inspect(candidate);
    match diagnose(&props) {
        None => Ok(props),
        Some(problem) => Err(rejection(problem, props)),
    }
}

fn rejection(problem: Problem, props: PathProperties) -> PathDiagError {
    let path = props.absolute_path;
    match problem {
        Problem::DoesNotExist => PathDiagError::PathNotFound { path },
        Problem::NotADirectory => PathDiagError::PathNotDirectory { path },
        Problem::NotReadable => PathDiagError::PathNotReadable { path },
    }
}
