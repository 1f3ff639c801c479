//! Ratatui-based picker adapter
//!
//! This module provides an implementation of the `Frontend` trait using
//! ratatui for drawing and crossterm for terminal input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements Frontend trait)                │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Session   │ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod finder;
mod state;
mod theme;
pub mod widgets;

pub use events::{map_key, poll_action};
pub use finder::RatatuiPicker;
pub use state::ListView;
pub use theme::Theme;
