//! View-only state for the ratatui picker
//!
//! Everything semantic lives in `Session`; this only tracks what part of
//! the list is on screen.

/// Scroll position of the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView {
    /// Index of the first visible item
    pub scroll_offset: usize,
    /// Height of the visible item list area (set during render)
    pub visible_height: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            visible_height: 20,
        }
    }
}

impl ListView {
    /// Adjust scroll offset to keep `cursor` visible in a list of `len` items
    pub const fn follow(&mut self, cursor: usize, len: usize) {
        if self.visible_height == 0 {
            return;
        }

        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = cursor.saturating_sub(self.visible_height - 1);
        }

        // The list may have shrunk under us
        let max_offset = len.saturating_sub(self.visible_height);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }
    }

    /// Range of item indices currently on screen
    #[must_use]
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (start + self.visible_height).min(len);
        start..end
    }
}
