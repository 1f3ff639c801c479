//! Search bar widget for query input

use crate::search::SearchMode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset)
    cursor: usize,
    /// Active search mode, shown in the title
    mode: SearchMode,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, mode: SearchMode, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            mode,
            theme,
        }
    }

    fn title(&self) -> String {
        match self.mode {
            SearchMode::Filename => " Filename search ".to_string(),
            SearchMode::Content => " Content search ".to_string(),
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.label_style())
            .title(Span::styled(self.title(), self.theme.label_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("> ", self.theme.label_style())];

        // Split query at cursor position
        let at = self.cursor.min(self.query.len());
        let (before, after) = self.query.split_at(at);
        spans.push(Span::raw(before));
        spans.push(caret);
        spans.push(Span::raw(after));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
