//! Search-specific error types
//!
//! This module defines the errors raised by the external search providers.
//! A provider that finds nothing is not an error: an empty listing is
//! returned as `Ok(vec![])`.
//!
//! # Error Types
//!
//! - **`ProviderUnavailable`**: The search binary is missing or cannot be spawned
//! - **`ProviderFailed`**: The binary ran but exited with a failure status

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provider binary could not be located or started
    #[error("'{program}' is unavailable: {reason}")]
    ProviderUnavailable {
        /// Binary that was looked up
        program: String,
        /// Why it could not be run
        reason: String,
    },

    /// The provider ran and reported a hard failure
    #[error("'{program}' failed{}: {stderr}", exit_suffix(.code))]
    ProviderFailed {
        /// Binary that was run
        program: String,
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
        /// Trimmed standard error output
        stderr: String,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}"))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
