//! Status vocabulary for path report lines.
//!
//! Colored output uses unicode markers; plain output uses bracketed
//! labels that stay readable in logs and pipes.

use super::theme::PathDiagTheme;

/// Outcome of checking one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The path passed every check.
    Ok,
    /// The path failed a check.
    Error,
}

impl StatusKind {
    /// Unicode marker for colored output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Error => "×",
        }
    }

    /// Bracketed label for plain output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Error => "[ERROR]",
        }
    }

    /// Marker styled with the given theme.
    pub fn styled(self, theme: &PathDiagTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Ok => theme.success.apply_to(icon).to_string(),
            Self::Error => theme.error.apply_to(icon).to_string(),
        }
    }
}
