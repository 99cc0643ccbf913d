//! Output verbosity.

/// Output verbosity mode, derived from the number of `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report problems only.
    #[default]
    Normal,
    /// Also report healthy paths and enable debug logs.
    Verbose,
    /// Everything in `Verbose`, plus per-path trace logs.
    Trace,
}

impl OutputMode {
    /// Map a `-v` count to a mode.
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Check if this mode prints a line for every healthy path.
    pub fn shows_successes(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    /// Log filter directive forced by this mode.
    ///
    /// `None` means `RUST_LOG` (or the quiet default) decides.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Verbose => Some("pathdiag=debug"),
            Self::Trace => Some("pathdiag=trace"),
        }
    }
}
