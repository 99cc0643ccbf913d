//! Filesystem inspection of a single path entry.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Serialize, Serializer};

/// Properties of one path entry, computed fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathProperties {
    /// The entry as it appeared in the variable, lossily decoded for display.
    pub raw_path: String,
    /// The entry resolved against the current directory.
    #[serde(serialize_with = "serialize_lossy")]
    pub absolute_path: PathBuf,
    /// Whether anything exists at the path (symlinks are followed).
    pub exists: bool,
    /// Whether the path is a directory.
    pub is_directory: bool,
    /// Whether the current user may read the path.
    pub is_readable: bool,
}

/// Inspect `raw` on the filesystem.
///
/// Never fails: a missing path yields `exists: false`. The filesystem is
/// queried with the exact bytes of `raw`.
pub fn inspect<S: AsRef<OsStr>>(raw: S) -> PathProperties {
    let path = Path::new(raw.as_ref());
    let metadata = fs::metadata(path).ok();

    let props = PathProperties {
        raw_path: path.to_string_lossy().into_owned(),
        absolute_path: absolutize(path),
        exists: metadata.is_some(),
        is_directory: metadata.as_ref().is_some_and(|m| m.is_dir()),
        is_readable: metadata.is_some() && is_readable(path),
    };

    tracing::trace!(
        "Inspected `{}`: exists={} dir={} readable={}",
        props.raw_path,
        props.exists,
        props.is_directory,
        props.is_readable
    );
    props
}

/// Resolve `raw` against the current directory without touching the
/// filesystem. `.` and `..` are folded lexically; symlinks are kept.
pub fn absolutize<S: AsRef<OsStr>>(raw: S) -> PathBuf {
    let path = Path::new(raw.as_ref());
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize(&joined)
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(unix)]
fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK) == 0 }
}

#[cfg(not(unix))]
fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}
