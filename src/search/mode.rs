//! Search mode switching between file name and file content matching

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which provider produces the candidates for the current query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match against the file listing
    #[default]
    Filename,
    /// Files whose contents match the query (delegated to the content provider)
    Content,
}

impl SearchMode {
    /// Return the other mode
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Filename => Self::Content,
            Self::Content => Self::Filename,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filename => "filename",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
