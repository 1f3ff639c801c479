//! Interactive session state
//!
//! A `Session` owns everything the picker mutates while it runs: the query,
//! the search mode, the selection, the composed result list and the
//! highlight. Key presses arrive as `Action`s and are processed one at a
//! time to completion, including any synchronous provider call.
//!
//! Errors never end a session. Provider, read and clipboard failures are
//! turned into transient status messages and the previous list stays on
//! screen.

use crate::AselektError;
use crate::aggregate::{AggregateOutput, Aggregator, ClipboardSink, copy_selection};
use crate::search::{
    ContentProvider, FilePath, FilenameProvider, ResultItem, SearchMode, SelectionSet, build_items,
};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Default lifetime of a status message
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// A user intent, already decoupled from the key that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert a character at the query cursor
    Insert(char),
    /// Delete the character before the query cursor
    Backspace,
    /// Delete the character under the query cursor
    Delete,
    /// Move the query cursor left
    CursorLeft,
    /// Move the query cursor right
    CursorRight,
    /// Clear the whole query
    ClearQuery,
    /// Delete the word before the query cursor
    DeleteWord,
    /// Move the highlight up
    Up,
    /// Move the highlight down
    Down,
    /// Move the highlight up one page
    PageUp,
    /// Move the highlight down one page
    PageDown,
    /// Highlight the first item
    Home,
    /// Highlight the last item
    End,
    /// Toggle selection of the highlighted item
    Toggle,
    /// Switch between filename and content search
    SwitchMode,
    /// Aggregate the selection and copy it to the clipboard
    Yank,
    /// Re-list the files under the search root
    Reload,
    /// End the session
    Quit,
}

/// Whether the event loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// External collaborators a session drives
pub struct Collaborators {
    /// Lists the file universe for filename mode
    pub filenames: Box<dyn FilenameProvider>,
    /// Answers content-mode queries
    pub content: Box<dyn ContentProvider>,
    /// Reads selected files
    pub aggregator: Aggregator,
    /// Receives the aggregated text on yank
    pub clipboard: Box<dyn ClipboardSink>,
}

/// State of one picker run
pub struct Session {
    collaborators: Collaborators,
    universe: Vec<FilePath>,
    query: String,
    query_cursor: usize,
    mode: SearchMode,
    selection: SelectionSet,
    items: Vec<ResultItem>,
    cursor: usize,
    page_size: usize,
    messages: Vec<StatusMessage>,
    message_ttl: Duration,
}

impl Session {
    /// Start a session: list the universe and compose the initial view
    ///
    /// A failing filename provider leaves the universe empty and records a
    /// status message instead of failing.
    #[must_use]
    pub fn new(collaborators: Collaborators, mode: SearchMode) -> Self {
        let mut session = Self {
            collaborators,
            universe: Vec::new(),
            query: String::new(),
            query_cursor: 0,
            mode,
            selection: SelectionSet::new(),
            items: Vec::new(),
            cursor: 0,
            page_size: 20,
            messages: Vec::new(),
            message_ttl: DEFAULT_MESSAGE_TTL,
        };

        match session.collaborators.filenames.list_files() {
            Ok(files) => session.universe = files,
            Err(e) => {
                tracing::warn!(error = %e, "initial file listing failed");
                session.add_message(MessageLevel::Error, format!("Search error: {e}"));
            }
        }
        session.refresh();
        session
    }

    /// Set how long status messages stay visible
    #[must_use]
    pub const fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    /// Process one action to completion
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Insert(c) => {
                self.query.insert(self.query_cursor, c);
                self.query_cursor += c.len_utf8();
                self.refresh();
            }
            Action::Backspace => {
                if self.query_cursor > 0 {
                    let prev = self.prev_boundary();
                    self.query.remove(prev);
                    self.query_cursor = prev;
                    self.refresh();
                }
            }
            Action::Delete => {
                if self.query_cursor < self.query.len() {
                    self.query.remove(self.query_cursor);
                    self.refresh();
                }
            }
            Action::CursorLeft => self.query_cursor = self.prev_boundary(),
            Action::CursorRight => {
                self.query_cursor = self.query[self.query_cursor..]
                    .chars()
                    .next()
                    .map_or(self.query_cursor, |c| self.query_cursor + c.len_utf8());
            }
            Action::ClearQuery => {
                if !self.query.is_empty() {
                    self.query.clear();
                    self.query_cursor = 0;
                    self.refresh();
                }
            }
            Action::DeleteWord => {
                if self.query_cursor > 0 {
                    let trimmed = self.query[..self.query_cursor].trim_end();
                    let start = trimmed.rfind(' ').map_or(0, |idx| idx + 1);
                    self.query.drain(start..self.query_cursor);
                    self.query_cursor = start;
                    self.refresh();
                }
            }
            Action::Up => self.cursor = self.cursor.saturating_sub(1),
            Action::Down => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            Action::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size),
            Action::PageDown => {
                self.cursor = (self.cursor + self.page_size).min(self.last_index());
            }
            Action::Home => self.cursor = 0,
            Action::End => self.cursor = self.last_index(),
            Action::Toggle => self.toggle_current(),
            Action::SwitchMode => self.switch_mode(),
            Action::Yank => self.yank(),
            Action::Reload => self.reload(),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Recompose the list; on provider failure keep the old list
    fn refresh(&mut self) {
        match build_items(
            self.mode,
            &self.query,
            &self.universe,
            &self.selection,
            self.collaborators.content.as_ref(),
        ) {
            Ok(items) => {
                self.items = items;
                self.cursor = self.cursor.min(self.last_index());
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %self.query, mode = %self.mode, "search failed");
                self.add_message(MessageLevel::Error, format!("Search error: {e}"));
            }
        }
    }

    fn toggle_current(&mut self) {
        let Some(path) = self.current_path().map(ToString::to_string) else {
            return;
        };
        let selected = self.selection.toggle(&path);
        tracing::debug!(%path, selected, "toggled selection");
        self.refresh();
    }

    fn switch_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.cursor = 0;
        self.refresh();
        self.add_message(
            MessageLevel::Info,
            format!("Switched to {} mode", self.mode),
        );
    }

    fn yank(&mut self) {
        if self.selection.is_empty() {
            self.add_message(MessageLevel::Warning, "No files selected!".to_string());
            return;
        }

        match copy_selection(
            &self.collaborators.aggregator,
            self.collaborators.clipboard.as_ref(),
            self.selection.as_slice(),
        ) {
            Ok(AggregateOutput { line_count, .. }) => {
                let count = self.selection.len();
                tracing::info!(files = count, lines = line_count, "copied selection");
                self.add_message(
                    MessageLevel::Success,
                    format!("Copied {count} file(s) to clipboard ({line_count} lines)"),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "yank failed");
                let text = match e {
                    AselektError::Aggregate(e) => format!("Read error: {e}"),
                    AselektError::Clipboard(e) => format!("Clipboard error: {e}"),
                    other => other.to_string(),
                };
                self.add_message(MessageLevel::Error, text);
            }
        }
    }

    fn reload(&mut self) {
        match self.collaborators.filenames.list_files() {
            Ok(files) => {
                self.universe = files;
                self.refresh();
                self.add_message(
                    MessageLevel::Info,
                    format!("Reloaded {} files", self.universe.len()),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "file listing reload failed");
                self.add_message(MessageLevel::Error, format!("Search error: {e}"));
            }
        }
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    const fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Path of the highlighted item, if any
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.items.get(self.cursor).map(|item| item.path.as_str())
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Byte offset of the cursor within the query
    #[must_use]
    pub const fn query_cursor(&self) -> usize {
        self.query_cursor
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The composed list, selected items first
    #[must_use]
    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    /// Index of the highlighted item
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of files in the current universe
    #[must_use]
    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    /// Set how far page up/down move (the visible list height)
    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// End the session, handing back the selection
    #[must_use]
    pub fn into_selection(self) -> SelectionSet {
        self.selection
    }
}
