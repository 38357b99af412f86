//! Shared helpers for running scheduler commands and reading their output.

pub mod command;

pub use command::{CommandError, run_command_allow_failure};

/// First whitespace-delimited token of the first line of `output`.
///
/// Returns an empty string when there is no such token, which callers treat
/// the same as an unrecognised state.
pub fn first_field(output: &str) -> &str {
    output
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or("")
}
