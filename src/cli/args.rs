//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Without `--can-add` the
//! tool runs in doctor mode.

use std::ffi::OsString;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// pathdiag - Diagnose paths in path-list environment variables.
#[derive(Debug, Parser)]
#[command(name = "pathdiag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The environment variable to check
    #[arg(
        long = "var",
        value_name = "NAME",
        env = "PATHDIAG_VAR",
        default_value = "PATH"
    )]
    pub variable: String,

    /// Check if a path can be added to the environment variable without problems
    #[arg(long = "can-add", value_name = "PATH")]
    pub candidate: Option<OsString>,

    /// Increase output verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print a JSON report instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
