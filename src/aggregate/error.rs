//! Aggregation and clipboard error types

use thiserror::Error;

/// Errors raised while reading the selected files
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A selected file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// The offending path, as selected
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl AggregateError {
    /// Path of the file that failed
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}

/// Errors raised while handing text to the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard mechanism accepted the text
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_read_error_names_path() {
        let error = AggregateError::Read {
            path: "src/gone.rs".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(error.path(), "src/gone.rs");
        assert_eq!(
            error.to_string(),
            "failed to read src/gone.rs: No such file or directory"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_clipboard_error_display() {
        let error = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(error.to_string(), "clipboard unavailable: no display");
    }
}
