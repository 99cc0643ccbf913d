//! Visual theme and color capability.

use console::Style;

use super::icons::StatusKind;
use crate::paths::Problem;

/// Styling for report lines.
///
/// Chosen once at startup from [`should_use_colors`] and handed to the UI.
#[derive(Debug, Clone)]
pub struct PathDiagTheme {
    /// Style for healthy paths (green).
    pub success: Style,
    /// Style for failure markers and offending paths (red).
    pub error: Style,
    colored: bool,
}

impl PathDiagTheme {
    /// Create a theme for the resolved color capability.
    pub fn new(colors: bool) -> Self {
        if colors {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// ANSI-colored theme with unicode markers.
    ///
    /// Styling is forced: whether colors are wanted was already decided.
    pub fn colored() -> Self {
        Self {
            success: Style::new().green().force_styling(true),
            error: Style::new().red().force_styling(true),
            colored: true,
        }
    }

    /// Theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            colored: false,
        }
    }

    /// Whether this theme emits ANSI escapes.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Format a line for a path that passed every check.
    pub fn format_path_ok(&self, path: &str) -> String {
        if self.colored {
            self.success
                .apply_to(format!("{} {}", StatusKind::Ok.icon(), path))
                .to_string()
        } else {
            format!("{} {}", StatusKind::Ok.bracketed(), path)
        }
    }

    /// Format a line for a path with a problem.
    pub fn format_path_problem(&self, path: &str, problem: Problem) -> String {
        if self.colored {
            format!(
                "{} Path {} {}",
                StatusKind::Error.styled(self),
                self.error.apply_to(path),
                problem
            )
        } else {
            format!("{} Path `{}` {}", StatusKind::Error.bracketed(), path, problem)
        }
    }

    /// Format a top-level failure such as a rejected candidate.
    pub fn format_error(&self, msg: &str) -> String {
        if self.colored {
            format!(
                "{} {}",
                self.error
                    .apply_to(format!("[{} pathdiag]", StatusKind::Error.icon())),
                msg
            )
        } else {
            format!("{} {}", StatusKind::Error.bracketed(), msg)
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color {
        tracing::debug!("Colors disabled by --no-color");
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        tracing::debug!("Colors disabled by NO_COLOR");
        return false;
    }

    if !(console::Term::stdout().is_term() && console::Term::stderr().is_term()) {
        tracing::debug!("Colors disabled: output is not a terminal");
        return false;
    }

    true
}
