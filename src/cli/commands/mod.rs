//! CLI mode implementations.
//!
//! Each mode implements the [`Command`] trait, which provides a uniform
//! interface for executing and reporting results. [`CommandDispatcher`]
//! picks the mode from the parsed flags.

pub mod can_add;
pub mod completions;
pub mod dispatcher;
pub mod doctor;

pub use can_add::CanAddCommand;
pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use doctor::DoctorCommand;
