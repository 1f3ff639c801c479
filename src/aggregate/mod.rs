//! Aggregation of selected files into one text blob
//!
//! Each file becomes a block of the form
//!
//! ```text
//! # <path>
//!
//! <raw content>
//!
//! ```
//!
//! and blocks are concatenated in selection order. The reported line count
//! is the number of `\n` bytes across all files, so a file without a
//! trailing newline contributes one less than its visible line count.

mod clipboard;
mod error;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use error::{AggregateError, ClipboardError};

use crate::AselektError;
use crate::search::FilePath;
use std::fs;
use std::path::{Path, PathBuf};

/// Concatenated text of the selected files plus their newline count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateOutput {
    /// All per-file blocks, in input order
    pub text: String,
    /// Sum of `\n` bytes in the raw file contents
    pub line_count: usize,
}

/// Reads selected files relative to a search root
#[derive(Debug, Clone)]
pub struct Aggregator {
    root: PathBuf,
}

impl Aggregator {
    /// Create an aggregator resolving paths against `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory paths are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read `paths` in order and build the combined output
    ///
    /// Headers use the paths exactly as given, not the resolved locations.
    ///
    /// # Errors
    ///
    /// Returns `AggregateError::Read` for the first file that cannot be
    /// read; no partial output is returned.
    pub fn aggregate(&self, paths: &[FilePath]) -> Result<AggregateOutput, AggregateError> {
        let mut output = AggregateOutput::default();

        for path in paths {
            let bytes = fs::read(self.root.join(path)).map_err(|source| AggregateError::Read {
                path: path.clone(),
                source,
            })?;

            output.line_count += count_newlines(&bytes);
            output.text.push_str("# ");
            output.text.push_str(path);
            output.text.push_str("\n\n");
            output.text.push_str(&String::from_utf8_lossy(&bytes));
            output.text.push_str("\n\n");
        }

        tracing::debug!(
            files = paths.len(),
            lines = output.line_count,
            bytes = output.text.len(),
            "aggregated selection"
        );
        Ok(output)
    }
}

/// Aggregate `paths` and hand the text to `clipboard`
///
/// Nothing reaches the clipboard unless every file was read.
///
/// # Errors
///
/// Returns `AselektError::Aggregate` for an unreadable file and
/// `AselektError::Clipboard` if the sink rejects the text.
pub fn copy_selection<C>(
    aggregator: &Aggregator,
    clipboard: &C,
    paths: &[FilePath],
) -> Result<AggregateOutput, AselektError>
where
    C: ClipboardSink + ?Sized,
{
    let output = aggregator.aggregate(paths)?;
    clipboard.write_text(&output.text)?;
    Ok(output)
}

/// Count `\n` bytes
#[must_use]
pub fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}
