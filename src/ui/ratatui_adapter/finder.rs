//! Ratatui-based picker implementation
//!
//! Implements the `Frontend` trait using ratatui for drawing and crossterm
//! for input.

use super::events::poll_action;
use super::state::ListView;
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, KeyHint, SearchBar, StatusBar};
use crate::session::{Flow, Session};
use crate::ui::error::{Result, UiError};
use crate::ui::traits::Frontend;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long to wait for input before redrawing (expires status messages)
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Ratatui-based interactive picker
pub struct RatatuiPicker {
    theme: Theme,
    hints: Vec<KeyHint>,
}

impl RatatuiPicker {
    /// Create a new picker with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        if !stdout.is_tty() {
            return Err(UiError::NotATerminal);
        }

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, session: &Session, view: &mut ListView) {
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Items
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let search_bar = SearchBar::new(
            session.query(),
            session.query_cursor(),
            session.mode(),
            &self.theme,
        );
        frame.render_widget(search_bar, main_layout[0]);

        // List height minus its borders
        view.visible_height = main_layout[1].height.saturating_sub(2) as usize;
        view.follow(session.cursor(), session.items().len());
        let item_list = ItemList::new(session.items(), session.cursor(), *view, &self.theme)
            .with_counts(session.selection().len(), session.universe_len());
        frame.render_widget(item_list, main_layout[1]);

        let messages = session.active_messages();
        frame.render_widget(StatusBar::new(&messages, &self.theme), main_layout[2]);

        frame.render_widget(HelpBar::new(&self.hints, &self.theme), main_layout[3]);
    }

    /// Draw, read one action, apply it; until the session quits
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session,
    ) -> Result<()> {
        let mut view = ListView::default();

        loop {
            session.cleanup_messages();
            terminal.draw(|frame| self.render(frame, session, &mut view))?;
            session.set_page_size(view.visible_height);

            let Some(action) = poll_action(POLL_INTERVAL)? else {
                continue;
            };

            tracing::trace!(?action, "key action");
            if session.apply(action) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for RatatuiPicker {
    fn run(&self, session: &mut Session) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, session);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_creation() {
        let picker = RatatuiPicker::new();
        assert_eq!(picker.theme, Theme::dark());
        assert_eq!(picker.hints.len(), HelpBar::default_hints().len());

        let plain = RatatuiPicker::default().with_theme(Theme::plain());
        assert_eq!(plain.theme, Theme::plain());
    }
}
