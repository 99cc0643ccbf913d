//! Command-line interface for pathdiag.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the mode implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Doctor, can-add and completions implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Command, CommandDispatcher, CommandResult};
