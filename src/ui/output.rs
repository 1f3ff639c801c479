//! Output abstraction layer
//!
//! Plain terminal output used once the TUI has exited: the final copy
//! report and error lines. Inside the TUI, messages go to the session's
//! status bar instead.

use crate::AselektError;
use crate::aggregate::{Aggregator, ClipboardSink, copy_selection};
use crate::search::FilePath;
use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use aselekt::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// This implementation uses colored output to stdout/stderr for a
/// traditional command-line interface.
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✔".green().bold(), message.green().bold());
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Printed when the picker exits without a selection
pub const NOTHING_SELECTED: &str = "No files selected – clipboard unchanged.";

/// Print the summary shown after a successful copy
pub fn report_copy<W: OutputWriter + ?Sized>(output: &W, selected: &[FilePath], line_count: usize) {
    output.write("");
    output.success("Copied to clipboard:");
    for path in selected {
        output.info(&format!("• {path}"));
    }
    output.write("");
    output.write(&format!("Total lines copied: {line_count}"));
}

/// Deliver the final selection once the terminal is restored
///
/// With `copy_on_exit` the files are aggregated, copied and summarized;
/// otherwise their paths are printed one per line.
///
/// # Errors
///
/// Returns `AselektError::Aggregate` or `AselektError::Clipboard` when the
/// copy fails. Nothing is printed in that case.
pub fn finish_selection<C, W>(
    selected: &[FilePath],
    copy_on_exit: bool,
    aggregator: &Aggregator,
    clipboard: &C,
    output: &W,
) -> Result<(), AselektError>
where
    C: ClipboardSink + ?Sized,
    W: OutputWriter + ?Sized,
{
    if selected.is_empty() {
        output.info(NOTHING_SELECTED);
        return Ok(());
    }

    if !copy_on_exit {
        for path in selected {
            output.write(path);
        }
        return Ok(());
    }

    let copied = copy_selection(aggregator, clipboard, selected)?;
    tracing::info!(
        files = selected.len(),
        lines = copied.line_count,
        "copied selection on exit"
    );
    report_copy(output, selected, copied.line_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingClipboard, write_file};
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct BufferWriter {
        lines: RefCell<Vec<(MessageLevel, String)>>,
    }

    impl BufferWriter {
        fn push(&self, level: MessageLevel, message: &str) {
            self.lines.borrow_mut().push((level, message.to_string()));
        }
    }

    impl OutputWriter for BufferWriter {
        fn write(&self, message: &str) {
            self.push(MessageLevel::Normal, message);
        }

        fn error(&self, message: &str) {
            self.push(MessageLevel::Error, message);
        }

        fn success(&self, message: &str) {
            self.push(MessageLevel::Success, message);
        }

        fn warning(&self, message: &str) {
            self.push(MessageLevel::Warning, message);
        }

        fn info(&self, message: &str) {
            self.push(MessageLevel::Info, message);
        }
    }

    #[test]
    fn test_stdout_writer_creation() {
        let _writer = StdoutWriter::new();
        let _writer2 = StdoutWriter::default();
    }

    #[test]
    fn test_report_copy() {
        let writer = BufferWriter::default();
        let selected = vec!["src/lib.rs".to_string(), "README.md".to_string()];

        report_copy(&writer, &selected, 42);

        let lines = writer.lines.into_inner();
        assert_eq!(
            lines,
            vec![
                (MessageLevel::Normal, String::new()),
                (MessageLevel::Success, "Copied to clipboard:".to_string()),
                (MessageLevel::Info, "• src/lib.rs".to_string()),
                (MessageLevel::Info, "• README.md".to_string()),
                (MessageLevel::Normal, String::new()),
                (MessageLevel::Normal, "Total lines copied: 42".to_string()),
            ]
        );
    }

    #[test]
    fn test_finish_without_selection() {
        let writer = BufferWriter::default();
        let clipboard = RecordingClipboard::new();

        finish_selection(&[], true, &Aggregator::new("."), &clipboard, &writer).unwrap();

        assert_eq!(
            writer.lines.into_inner(),
            vec![(MessageLevel::Info, NOTHING_SELECTED.to_string())]
        );
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_finish_copies_and_reports() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.txt", "x\ny\n");
        write_file(dir.path(), "b.txt", "z");
        let writer = BufferWriter::default();
        let clipboard = RecordingClipboard::new();
        let selected = vec!["a.txt".to_string(), "b.txt".to_string()];

        finish_selection(&selected, true, &Aggregator::new(dir.path()), &clipboard, &writer)
            .unwrap();

        assert_eq!(
            clipboard.writes(),
            vec!["# a.txt\n\nx\ny\n\n\n# b.txt\n\nz\n\n".to_string()]
        );
        let lines = writer.lines.into_inner();
        assert!(lines.contains(&(MessageLevel::Info, "• b.txt".to_string())));
        assert_eq!(
            lines.last(),
            Some(&(MessageLevel::Normal, "Total lines copied: 2".to_string()))
        );
    }

    #[test]
    fn test_finish_prints_paths_without_copy() {
        let writer = BufferWriter::default();
        let clipboard = RecordingClipboard::new();
        let selected = vec!["b.txt".to_string(), "a.txt".to_string()];

        finish_selection(&selected, false, &Aggregator::new("."), &clipboard, &writer).unwrap();

        assert_eq!(
            writer.lines.into_inner(),
            vec![
                (MessageLevel::Normal, "b.txt".to_string()),
                (MessageLevel::Normal, "a.txt".to_string()),
            ]
        );
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_finish_read_error_prints_nothing() {
        let dir = TempDir::new().unwrap();
        let writer = BufferWriter::default();
        let clipboard = RecordingClipboard::new();

        let err = finish_selection(
            &["gone.txt".to_string()],
            true,
            &Aggregator::new(dir.path()),
            &clipboard,
            &writer,
        )
        .unwrap_err();

        assert!(matches!(err, AselektError::Aggregate(_)));
        assert!(writer.lines.into_inner().is_empty());
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
