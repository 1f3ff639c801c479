//! Tracing setup
//!
//! The picker owns the terminal, so logs only ever go to a file and only
//! when one is configured.

use crate::config::AselektConfig;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber if `config.log_file` is set
///
/// Returns `Ok(false)` when logging stays disabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(config: &AselektConfig) -> io::Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(rust_log.as_deref(), &config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %config.root.display(),
        "logging initialized"
    );
    Ok(true)
}

/// Pick the filter: `RUST_LOG` when it parses, else the configured level
#[must_use]
pub fn filter_for(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Open `path` for appending, creating it if needed
///
/// # Errors
///
/// Returns an error if the file cannot be created or opened.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_filter_prefers_rust_log() {
        assert_eq!(filter_for(Some("aselekt=trace"), "info").to_string(), "aselekt=trace");
    }

    #[test]
    fn test_filter_falls_back_to_level() {
        assert_eq!(filter_for(None, "debug").to_string(), "debug");
    }

    #[test]
    fn test_disabled_without_log_file() {
        let config = AselektConfig {
            root: ".".into(),
            filename_command: "fd".to_string(),
            content_command: "rg".to_string(),
            mode: crate::search::SearchMode::Filename,
            copy_on_exit: true,
            message_ttl_secs: 5,
            log_file: None,
            log_level: "info".to_string(),
        };

        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aselekt.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(open_log_file(&dir.path().join("nope/aselekt.log")).is_err());
    }
}
