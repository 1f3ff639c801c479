//! Aselekt - pick files interactively and copy their contents in one go
//!
//! This library provides the selection/search engine behind the `aselekt`
//! terminal picker: incremental filtering by file name or by content,
//! order-preserving toggle selection, and aggregation of the selected files
//! into a single text blob ready for the clipboard.

use thiserror::Error;

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod logging;
pub mod search;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AselektError {
    /// Search provider error
    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),
    /// A selected file could not be read
    #[error("Aggregation error: {0}")]
    Aggregate(#[from] aggregate::AggregateError),
    /// No clipboard mechanism accepted the text
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] aggregate::ClipboardError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
