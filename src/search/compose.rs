//! Result composition
//!
//! Builds the ordered list shown to the user: every selected path first
//! (starred, whether or not it matches), followed by the unselected matches
//! for the current mode and query.

use super::error::SearchError;
use super::mode::SearchMode;
use super::provider::ContentProvider;
use super::selection::SelectionSet;
use super::FilePath;

/// A displayed path, flagged when it belongs to the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Path relative to the search root
    pub path: FilePath,
    /// Whether the path is currently selected
    pub starred: bool,
}

impl ResultItem {
    #[must_use]
    pub fn starred(path: impl Into<FilePath>) -> Self {
        Self {
            path: path.into(),
            starred: true,
        }
    }

    #[must_use]
    pub fn plain(path: impl Into<FilePath>) -> Self {
        Self {
            path: path.into(),
            starred: false,
        }
    }
}

/// Compose the display list for `query` in `mode`
///
/// In filename mode `universe` is filtered by case-insensitive substring
/// match (an empty query matches everything). In content mode the query is
/// handed to `content` verbatim; an empty query lists nothing and the
/// provider is not invoked.
///
/// # Errors
///
/// Returns `SearchError` if the content provider fails. Nothing is returned
/// in that case, so callers keep whatever list they showed before.
pub fn build_items<C>(
    mode: SearchMode,
    query: &str,
    universe: &[FilePath],
    selection: &SelectionSet,
    content: &C,
) -> Result<Vec<ResultItem>, SearchError>
where
    C: ContentProvider + ?Sized,
{
    let mut items: Vec<ResultItem> = selection.iter().map(ResultItem::starred).collect();

    match mode {
        SearchMode::Filename => {
            let needle = query.to_lowercase();
            items.extend(
                universe
                    .iter()
                    .filter(|path| needle.is_empty() || path.to_lowercase().contains(&needle))
                    .filter(|path| !selection.contains(path))
                    .map(ResultItem::plain),
            );
        }
        SearchMode::Content => {
            if !query.is_empty() {
                let matches = content.search(query)?;
                items.extend(
                    matches
                        .into_iter()
                        .filter(|path| !selection.contains(path))
                        .map(ResultItem::plain),
                );
            }
        }
    }

    Ok(items)
}
