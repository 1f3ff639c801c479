//! Clipboard sinks
//!
//! `SystemClipboard` tries the Wayland and X11 command-line helpers first
//! on Linux, since they keep serving the selection after this process exits,
//! and falls back to `arboard` everywhere else.

use super::error::ClipboardError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Anything that can accept the aggregated text
pub trait ClipboardSink {
    /// Place `text` on the clipboard
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` if no mechanism accepted the text.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Command-line clipboard helpers tried in order on Linux
#[cfg(target_os = "linux")]
const LINUX_HELPERS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// The platform clipboard, reached through a cascade of mechanisms
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pipe `text` into `program args...`
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), String> {
        let path = which::which(program).map_err(|e| format!("{program}: {e}"))?;

        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("{program}: {e}"))?;

        // stdin is dropped before waiting so the helper sees EOF
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));

        // Reap the helper even when it stopped reading early
        let status = child.wait().map_err(|e| format!("{program}: {e}"))?;
        written.map_err(|e| format!("{program}: {e}"))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("{program} exited with status: {:?}", status.code()))
        }
    }

    fn write_with_arboard(text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| format!("arboard: {e}"))?;
        clipboard
            .set_text(text)
            .map_err(|e| format!("arboard: {e}"))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        for (program, args) in LINUX_HELPERS {
            match Self::pipe_to(program, args, text) {
                Ok(()) => {
                    tracing::debug!(helper = *program, "copied to clipboard");
                    return Ok(());
                }
                Err(e) => tracing::debug!(helper = *program, error = %e, "clipboard helper failed"),
            }
        }

        Self::write_with_arboard(text).map_err(|e| {
            tracing::warn!(error = %e, "no clipboard mechanism available");
            ClipboardError::Unavailable(e)
        })
    }
}
