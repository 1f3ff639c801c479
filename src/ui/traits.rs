//! Core traits for the UI abstraction layer

use super::error::Result;
use crate::session::Session;

/// Something that can drive a session until the user quits
///
/// The terminal adapter is the real implementation; tests replay scripted
/// actions instead.
pub trait Frontend {
    /// Feed user actions into `session` until it reports `Flow::Quit`
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot read input or draw.
    fn run(&self, session: &mut Session) -> Result<()>;
}
