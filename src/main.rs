//! Aselekt CLI application entry point
//!
//! Opens the interactive picker over the files under a root directory and,
//! after the user quits, copies the selected files to the clipboard.
//!
//! # Usage
//!
//! ```bash
//! # Pick files under the current directory
//! aselekt
//!
//! # Start in content search under another root
//! aselekt --root ~/src/project --mode content
//!
//! # Only print the selected paths
//! aselekt --no-copy-on-exit
//! ```
//!
//! # Keys
//!
//! Enter toggles the highlighted file, Ctrl+Y copies the selection
//! immediately, Ctrl+O switches between filename and content search,
//! Ctrl+R reloads the file listing and Esc quits.

use aselekt::{
    AselektError,
    aggregate::{Aggregator, SystemClipboard},
    cli::Cli,
    config::AselektConfig,
    logging,
    search::{FdProvider, FilePath, RipgrepProvider},
    session::{Collaborators, Session},
    ui::{
        Frontend, OutputWriter, RatatuiPicker, StdoutWriter,
        output::finish_selection,
    },
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, AselektError>;

/// Run the picker and deliver the selection
fn run(cli: &Cli, output: &StdoutWriter) -> Result<ExitCode> {
    let config = AselektConfig::load(cli)?;
    logging::init_logging(&config)?;

    let aggregator = Aggregator::new(config.root.clone());
    let collaborators = Collaborators {
        filenames: Box::new(FdProvider::new(config.filename_command.clone(), &config.root)),
        content: Box::new(RipgrepProvider::new(config.content_command.clone(), &config.root)),
        aggregator: aggregator.clone(),
        clipboard: Box::new(SystemClipboard::new()),
    };

    let mut session =
        Session::new(collaborators, config.mode).with_message_ttl(config.message_ttl());
    RatatuiPicker::new().run(&mut session)?;

    let selected: Vec<FilePath> = session.into_selection().into();
    tracing::info!(files = selected.len(), "picker closed");

    match finish_selection(
        &selected,
        config.copy_on_exit,
        &aggregator,
        &SystemClipboard::new(),
        output,
    ) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(AselektError::Aggregate(e)) => {
            tracing::warn!(error = %e, "copy on exit failed");
            output.error(&format!("clipboard error: {e}"));
            Ok(ExitCode::FAILURE)
        }
        Err(AselektError::Clipboard(e)) => {
            tracing::warn!(error = %e, "copy on exit failed");
            output.error(&format!("clipboard error: {e}"));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = StdoutWriter::new();

    match run(&cli, &output) {
        Ok(code) => code,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
