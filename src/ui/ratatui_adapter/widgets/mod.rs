//! Ratatui widgets for the picker TUI
//!
//! Custom widgets for rendering the picker interface.

mod help_bar;
mod item_list;
mod search_bar;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

/// Flatten a rendered buffer into one string, row by row
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
