//! UI abstraction layer
//!
//! This module separates the session logic from the terminal that drives
//! it. A `Frontend` feeds `Action`s into a `Session`; the ratatui adapter
//! is the interactive implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Session (query, mode, selection)   │
//! └────────────────▲────────────────────────┘
//!                  │ Actions
//! ┌────────────────┴────────────────────────┐
//! │      Frontend trait                     │
//! └────────────────▲────────────────────────┘
//!                  │ Implemented by
//! ┌────────────────┴────────────────────────┐
//! │ RatatuiPicker (ratatui + crossterm)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use aselekt::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! ```

mod error;
mod traits;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{RatatuiPicker, Theme};
pub use traits::Frontend;
