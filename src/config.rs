//! Runtime configuration
//!
//! Settings are layered with the `config` crate: built-in defaults, then
//! `ASELEKT_*` environment variables, then command-line overrides. There is
//! no configuration file.

use crate::cli::Cli;
use crate::search::SearchMode;
use ::config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides (`ASELEKT_ROOT`, `ASELEKT_MODE`, ...)
pub const ENV_PREFIX: &str = "ASELEKT";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AselektConfig {
    /// Directory the providers run in and paths are resolved against
    pub root: PathBuf,

    /// Binary used to list files
    pub filename_command: String,

    /// Binary used to search file contents
    pub content_command: String,

    /// Search mode at startup
    pub mode: SearchMode,

    /// Aggregate and copy the selection after quitting
    pub copy_on_exit: bool,

    /// Lifetime of a status message in seconds
    pub message_ttl_secs: u64,

    /// Write tracing output to this file
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

/// Values taken from the command line, applied last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub mode: Option<SearchMode>,
    pub filename_command: Option<String>,
    pub content_command: Option<String>,
    pub copy_on_exit: Option<bool>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            mode: cli.mode,
            filename_command: cli.fd_command.clone(),
            content_command: cli.rg_command.clone(),
            copy_on_exit: cli.no_copy_on_exit.then_some(false),
            log_file: cli.log_file.clone(),
            log_level: cli.verbose.then(|| "debug".to_string()),
        }
    }
}

impl AselektConfig {
    /// Load configuration from defaults, the process environment and `cli`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment value cannot be parsed into
    /// its setting (e.g. `ASELEKT_MODE=sideways`).
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::layered(
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
            &Overrides::from(cli),
        )
    }

    /// Build the configuration from an explicit environment source
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a layered value has the wrong type.
    pub fn layered(env: Environment, overrides: &Overrides) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("root", ".")?
            .set_default("filename_command", "fd")?
            .set_default("content_command", "rg")?
            .set_default("mode", SearchMode::default().as_str())?
            .set_default("copy_on_exit", true)?
            .set_default("message_ttl_secs", 5)?
            .set_default("log_level", "info")?
            .add_source(env)
            .set_override_option("root", overrides.root.as_deref().map(path_value))?
            .set_override_option("mode", overrides.mode.map(|m| m.as_str()))?
            .set_override_option("filename_command", overrides.filename_command.clone())?
            .set_override_option("content_command", overrides.content_command.clone())?
            .set_override_option("copy_on_exit", overrides.copy_on_exit)?
            .set_override_option("log_file", overrides.log_file.as_deref().map(path_value))?
            .set_override_option("log_level", overrides.log_level.clone())?
            .build()?;

        settings.try_deserialize()
    }

    /// Status message lifetime as a `Duration`
    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
