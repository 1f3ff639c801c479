//! File path providers backed by external search tools
//!
//! Both providers shell out synchronously and parse newline-delimited
//! paths from standard output. The filename provider lists every file
//! under the search root; the content provider lists files whose contents
//! match a query.
//!
//! # Exit status convention
//!
//! `rg` exits with `1` when nothing matched and `2` on real errors, so the
//! content provider maps `1` to an empty result. The filename provider has
//! no such status and treats any non-zero exit as a failure.

use super::FilePath;
use super::error::SearchError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Arguments passed to the filename lister
pub const FD_ARGS: &[&str] = &["--type", "f", "--strip-cwd-prefix"];

/// Arguments passed to the content searcher, before `-- <query>`
pub const RG_ARGS: &[&str] = &[
    "--files-with-matches",
    "--smart-case",
    "--fixed-strings",
    "--sort",
    "path",
];

/// Exit status `rg` uses for "no matches"
const RG_NO_MATCH_CODE: i32 = 1;

/// Lists every file under the search root
pub trait FilenameProvider {
    /// Return the full file listing in provider order
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the listing tool cannot run or fails.
    fn list_files(&self) -> Result<Vec<FilePath>, SearchError>;
}

/// Lists files whose contents match a query
pub trait ContentProvider {
    /// Return matching files in provider order
    ///
    /// An empty result means nothing matched and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the search tool cannot run or fails.
    fn search(&self, query: &str) -> Result<Vec<FilePath>, SearchError>;
}

/// A synchronous invocation of an external binary in a fixed directory
#[derive(Debug, Clone)]
pub(crate) struct ExternalCommand {
    program: String,
    args: Vec<String>,
    dir: PathBuf,
    no_match_code: Option<i32>,
}

impl ExternalCommand {
    pub(crate) fn new(program: impl Into<String>, args: &[&str], dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
            dir: dir.into(),
            no_match_code: None,
        }
    }

    /// Treat `code` as an empty, successful result
    pub(crate) const fn with_no_match_code(mut self, code: i32) -> Self {
        self.no_match_code = Some(code);
        self
    }

    /// Run the binary with `extra` appended and parse its output as paths
    pub(crate) fn run(&self, extra: &[&str]) -> Result<Vec<FilePath>, SearchError> {
        let resolved = which::which(&self.program).map_err(|e| SearchError::ProviderUnavailable {
            program: self.program.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(program = %self.program, args = ?self.args, extra = ?extra, "running search provider");

        let output = Command::new(resolved)
            .args(&self.args)
            .args(extra)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SearchError::ProviderUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let code = output.status.code();
        if output.status.success() {
            let paths = parse_listing(&output.stdout);
            tracing::debug!(program = %self.program, count = paths.len(), "search provider finished");
            Ok(paths)
        } else if code.is_some() && code == self.no_match_code {
            tracing::debug!(program = %self.program, "search provider found no matches");
            Ok(Vec::new())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(program = %self.program, ?code, %stderr, "search provider failed");
            Err(SearchError::ProviderFailed {
                program: self.program.clone(),
                code,
                stderr,
            })
        }
    }
}

/// Split newline-delimited tool output into paths, skipping empty lines
///
/// Lines are kept verbatim apart from the `\r` of a `\r\n` ending, since
/// file names may start or end with spaces.
#[must_use]
pub fn parse_listing(stdout: &[u8]) -> Vec<FilePath> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Filename provider that runs `fd` in the search root
#[derive(Debug, Clone)]
pub struct FdProvider {
    command: ExternalCommand,
}

impl FdProvider {
    /// Create a provider running `program` (normally `fd`) in `root`
    #[must_use]
    pub fn new(program: impl Into<String>, root: &Path) -> Self {
        Self {
            command: ExternalCommand::new(program, FD_ARGS, root),
        }
    }
}

impl FilenameProvider for FdProvider {
    fn list_files(&self) -> Result<Vec<FilePath>, SearchError> {
        self.command.run(&[])
    }
}

/// Content provider that runs `rg` in the search root
#[derive(Debug, Clone)]
pub struct RipgrepProvider {
    command: ExternalCommand,
}

impl RipgrepProvider {
    /// Create a provider running `program` (normally `rg`) in `root`
    #[must_use]
    pub fn new(program: impl Into<String>, root: &Path) -> Self {
        Self {
            command: ExternalCommand::new(program, RG_ARGS, root)
                .with_no_match_code(RG_NO_MATCH_CODE),
        }
    }
}

impl ContentProvider for RipgrepProvider {
    fn search(&self, query: &str) -> Result<Vec<FilePath>, SearchError> {
        self.command.run(&["--", query])
    }
}
