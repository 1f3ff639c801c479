//! Selection and search engine
//!
//! Provides the pieces the interactive picker is built from:
//! 1. A two-valued search mode (file name or file content)
//! 2. An insertion-ordered selection set with toggle semantics
//! 3. The result composer that merges the selection with live matches
//! 4. Provider traits plus the external-tool providers (`fd`, `rg`)

pub mod compose;
pub mod error;
pub mod mode;
pub mod provider;
pub mod selection;

pub use compose::{ResultItem, build_items};
pub use error::SearchError;
pub use mode::SearchMode;
pub use provider::{ContentProvider, FdProvider, FilenameProvider, RipgrepProvider};
pub use selection::SelectionSet;

/// A path relative to the search root, as produced by a provider
pub type FilePath = String;
