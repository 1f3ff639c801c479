//! Item list widget for displaying composed results

use crate::search::ResultItem;
use crate::ui::ratatui_adapter::state::ListView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Item list widget that displays results with cursor and selection markers
pub struct ItemList<'a> {
    /// Composed results, selected first
    items: &'a [ResultItem],
    /// Index of the highlighted item
    cursor: usize,
    /// Scroll position
    view: ListView,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(items: &'a [ResultItem], cursor: usize, view: ListView, theme: &'a Theme) -> Self {
        Self {
            items,
            cursor,
            view,
            theme,
            title: format!(" Files ({}) ", items.len()),
        }
    }

    /// Title showing how many files are selected out of the universe
    #[must_use]
    pub fn with_counts(mut self, selected: usize, total: usize) -> Self {
        self.title = format!(" Files ({selected}/{total} selected) ");
        self
    }

    /// Text of one row without styling
    #[must_use]
    pub fn row_text(item: &ResultItem, is_cursor: bool) -> String {
        let cursor = if is_cursor { "> " } else { "  " };
        let star = if item.starred { "* " } else { "" };
        format!("{cursor}{star}{}", item.path)
    }

    fn render_item(&self, item: &'a ResultItem, is_cursor: bool) -> ListItem<'a> {
        // Selected rows keep their color under the cursor
        let style = match (item.starred, is_cursor) {
            (true, true) => self.theme.starred_style().add_modifier(Modifier::BOLD),
            (true, false) => self.theme.starred_style(),
            (false, true) => self.theme.cursor_style(),
            (false, false) => self.theme.normal_style(),
        };

        ListItem::new(Line::from(Span::styled(Self::row_text(item, is_cursor), style)))
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let rows: Vec<ListItem> = self
            .view
            .visible_range(self.items.len())
            .filter_map(|idx| {
                let item = self.items.get(idx)?;
                Some(self.render_item(item, idx == self.cursor))
            })
            .collect();

        List::new(rows).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::buffer_text;

    #[test]
    fn test_row_text() {
        let starred = ResultItem::starred("a.rs");
        let plain = ResultItem::plain("b.rs");

        assert_eq!(ItemList::row_text(&starred, true), "> * a.rs");
        assert_eq!(ItemList::row_text(&plain, true), "> b.rs");
        assert_eq!(ItemList::row_text(&starred, false), "  * a.rs");
        assert_eq!(ItemList::row_text(&plain, false), "  b.rs");
    }

    #[test]
    fn test_renders_visible_rows_and_counts() {
        let theme = Theme::plain();
        let items = vec![
            ResultItem::starred("src/main.rs"),
            ResultItem::plain("Cargo.toml"),
            ResultItem::plain("README.md"),
        ];
        let view = ListView {
            scroll_offset: 1,
            visible_height: 2,
        };
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        ItemList::new(&items, 1, view, &theme)
            .with_counts(1, 12)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("1/12 selected"));
        assert!(text.contains("> Cargo.toml"));
        assert!(text.contains("  README.md"));
        assert!(!text.contains("src/main.rs"));
    }

    #[test]
    fn test_highlighted_starred_row_keeps_color() {
        let theme = Theme::dark();
        let items = vec![ResultItem::starred("a.rs"), ResultItem::plain("b.rs")];
        let view = ListView {
            scroll_offset: 0,
            visible_height: 2,
        };
        let area = Rect::new(0, 0, 20, 4);

        let mut buf = Buffer::empty(area);
        ItemList::new(&items, 0, view, &theme).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), ">");
        assert_eq!(buf[(5, 1)].fg, theme.starred);
        assert!(buf[(5, 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(3, 2)].fg, theme.normal);

        let mut buf = Buffer::empty(area);
        ItemList::new(&items, 1, view, &theme).render(area, &mut buf);
        assert_eq!(buf[(5, 1)].fg, theme.starred);
        assert_eq!(buf[(3, 2)].fg, theme.cursor);
    }
}
