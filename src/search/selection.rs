//! Ordered selection set
//!
//! Paths are kept in the order they were selected. Toggling a selected path
//! removes it; toggling it again appends it at the end.

use super::FilePath;

/// Insertion-ordered set of selected paths, free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: Vec<FilePath>,
}

impl SelectionSet {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Add `path` if absent, remove it if present
    ///
    /// Returns `true` when the path is selected after the call.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.remove(path) {
            false
        } else {
            self.paths.push(path.to_string());
            true
        }
    }

    /// Remove `path` if present, preserving the order of the rest
    ///
    /// Returns `true` if something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        match self.paths.iter().position(|p| p == path) {
            Some(idx) => {
                self.paths.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Check whether `path` is selected
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Selected paths in selection order
    #[must_use]
    pub fn as_slice(&self) -> &[FilePath] {
        &self.paths
    }

    /// Iterate over selected paths in selection order
    pub fn iter(&self) -> impl Iterator<Item = &FilePath> {
        self.paths.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<SelectionSet> for Vec<FilePath> {
    fn from(set: SelectionSet) -> Self {
        set.paths
    }
}
