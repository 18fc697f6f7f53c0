//! Presentation layer.
//!
//! - [`format`] - Pure display projections (result panel, history rows, expiry)
//! - [`view`] - The [`view::View`] trait a front end implements
//! - [`clipboard`] - Clipboard trait and system implementation
//! - [`terminal`] - Terminal front end

pub mod clipboard;
pub mod format;
pub mod terminal;
pub mod view;

pub use clipboard::{Clipboard, ONE_SHOT_HOLD, SystemClipboard};
pub use terminal::TerminalView;
pub use view::View;
