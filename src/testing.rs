//! Testing utilities for aselekt
//!
//! In-memory providers and clipboard sinks that record how they were
//! called, so session and composer tests run without `fd`, `rg`, or a
//! display server. Handles are cheap to clone and share their counters,
//! which lets a test keep one copy after moving another into a `Session`.
//!
//! Only available when compiled with `cfg(test)`.

use crate::aggregate::{ClipboardError, ClipboardSink};
use crate::search::{ContentProvider, FilePath, FilenameProvider, SearchError};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Filename provider returning a fixed listing
#[derive(Debug, Clone)]
pub struct StaticFilenameProvider {
    files: Rc<RefCell<Vec<FilePath>>>,
    calls: Rc<Cell<usize>>,
}

impl StaticFilenameProvider {
    pub fn new(files: &[&str]) -> Self {
        Self {
            files: Rc::new(RefCell::new(files.iter().map(ToString::to_string).collect())),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Replace the listing returned by later calls
    pub fn set_files(&self, files: &[&str]) {
        *self.files.borrow_mut() = files.iter().map(ToString::to_string).collect();
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl FilenameProvider for StaticFilenameProvider {
    fn list_files(&self) -> Result<Vec<FilePath>, SearchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.files.borrow().clone())
    }
}

/// Filename provider whose binary is never found
#[derive(Debug, Clone, Copy)]
pub struct FailingFilenameProvider;

impl FilenameProvider for FailingFilenameProvider {
    fn list_files(&self) -> Result<Vec<FilePath>, SearchError> {
        Err(SearchError::ProviderUnavailable {
            program: "fd".to_string(),
            reason: "cannot find binary path".to_string(),
        })
    }
}

/// Content provider returning fixed matches for any query
#[derive(Debug, Clone)]
pub struct StaticContentProvider {
    matches: Rc<RefCell<Vec<FilePath>>>,
    calls: Rc<Cell<usize>>,
    last_query: Rc<RefCell<Option<String>>>,
    fail: Rc<Cell<bool>>,
}

impl StaticContentProvider {
    pub fn new(matches: Vec<FilePath>) -> Self {
        Self {
            matches: Rc::new(RefCell::new(matches)),
            calls: Rc::new(Cell::new(0)),
            last_query: Rc::new(RefCell::new(None)),
            fail: Rc::new(Cell::new(false)),
        }
    }

    /// Make later calls fail with a hard provider error
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.borrow().clone()
    }
}

impl ContentProvider for StaticContentProvider {
    fn search(&self, query: &str) -> Result<Vec<FilePath>, SearchError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some(query.to_string());
        if self.fail.get() {
            return Err(SearchError::ProviderFailed {
                program: "rg".to_string(),
                code: Some(2),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(self.matches.borrow().clone())
    }
}

/// Content provider that always fails
#[derive(Debug, Clone, Copy)]
pub struct FailingContentProvider;

impl ContentProvider for FailingContentProvider {
    fn search(&self, _query: &str) -> Result<Vec<FilePath>, SearchError> {
        Err(SearchError::ProviderFailed {
            program: "rg".to_string(),
            code: Some(2),
            stderr: "simulated failure".to_string(),
        })
    }
}

/// Clipboard sink that keeps every text written to it
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    fail: Rc<Cell<bool>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make later writes fail as if no clipboard were reachable
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail.get() {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Write `content` to `dir/name`, creating parent directories
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
}
