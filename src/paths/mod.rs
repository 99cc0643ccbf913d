//! Path-list reading, splitting, inspection and validation.
//!
//! - [`env`] - Reads the named environment variable
//! - [`list`] - Splits a raw value into an ordered [`PathList`]
//! - [`inspect`] - Computes [`PathProperties`] for one entry
//! - [`check`] - Classifies entries and validates can-add candidates

pub mod check;
pub mod env;
pub mod inspect;
pub mod list;

pub use check::{check_candidate, diagnose, Problem};
pub use env::read_variable;
pub use inspect::{inspect, PathProperties};
pub use list::{join_entries, split_entries, PathList, DELIMITER};
