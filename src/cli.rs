//! Command-line interface definitions and parsing
//!
//! Every flag is optional; anything left unset falls back to `ASELEKT_*`
//! environment variables and then to built-in defaults (see `config`).
//!
//! # Examples
//!
//! ```no_run
//! use aselekt::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! if cli.verbose {
//!     println!("searching under {:?}", cli.root);
//! }
//! ```

use crate::search::SearchMode;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "aselekt")]
#[command(
    about = "Pick files interactively and copy their contents to the clipboard",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Directory to search (defaults to the current directory)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Search mode at startup
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<SearchMode>,

    /// Binary used to list files
    #[arg(long = "fd-command", value_name = "BIN")]
    pub fd_command: Option<String>,

    /// Binary used to search file contents
    #[arg(long = "rg-command", value_name = "BIN")]
    pub rg_command: Option<String>,

    /// Print the selected paths instead of copying their contents
    #[arg(long = "no-copy-on-exit")]
    pub no_copy_on_exit: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list (first item is the binary name)
    ///
    /// Exits the process with a usage message on invalid input, like
    /// `parse_args`.
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::parse_from_args(["aselekt"]);
        assert_eq!(cli.root, None);
        assert_eq!(cli.mode, None);
        assert!(!cli.no_copy_on_exit);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from_args([
            "aselekt",
            "--root",
            "/tmp/project",
            "--mode",
            "content",
            "--fd-command",
            "fdfind",
            "--rg-command",
            "/usr/local/bin/rg",
            "--no-copy-on-exit",
            "--log-file",
            "/tmp/aselekt.log",
            "-v",
        ]);

        assert_eq!(cli.root, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cli.mode, Some(SearchMode::Content));
        assert_eq!(cli.fd_command.as_deref(), Some("fdfind"));
        assert_eq!(cli.rg_command.as_deref(), Some("/usr/local/bin/rg"));
        assert!(cli.no_copy_on_exit);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/aselekt.log")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let result = Cli::try_parse_from(["aselekt", "--mode", "sideways"]);
        assert!(result.is_err());
    }
}
