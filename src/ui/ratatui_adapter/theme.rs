//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the picker.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Color for the search bar label and borders with focus
    pub label: Color,
    /// Color for the highlighted row
    pub cursor: Color,
    /// Color for selected rows
    pub starred: Color,
    /// Color for plain rows
    pub normal: Color,
    /// Color for help text and borders
    pub help: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            label: Color::Rgb(0x7d, 0xd3, 0xfc),
            cursor: Color::Rgb(0xf4, 0x72, 0xb6),
            starred: Color::Rgb(0xfa, 0xcc, 0x15),
            normal: Color::Rgb(0xcb, 0xd5, 0xe1),
            help: Color::Rgb(0x94, 0xa3, 0xb8),
            success: Color::Rgb(0x4a, 0xde, 0x80),
            error: Color::Rgb(0xf8, 0x71, 0x71),
            warning: Color::Rgb(0xfb, 0xbf, 0x24),
        }
    }

    /// Theme without colors, for terminals that cannot render them
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            label: Color::Reset,
            cursor: Color::Reset,
            starred: Color::Reset,
            normal: Color::Reset,
            help: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            warning: Color::Reset,
        }
    }

    /// Style for the search bar label
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label).add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for selected rows
    #[must_use]
    pub fn starred_style(&self) -> Style {
        Style::default().fg(self.starred)
    }

    /// Style for plain rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.normal)
    }

    /// Style for help text
    #[must_use]
    pub fn help_style(&self) -> Style {
        Style::default().fg(self.help)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.help)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.label)
    }
}
