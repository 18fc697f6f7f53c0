//! Core data structures of the client.
//!
//! # Entity Types
//!
//! - [`ShortenForm`] - Raw user input
//! - [`ShortenRequest`] - Validated request sent to the backend
//! - [`ShortenResult`] - Backend response for a successful shortening
//! - [`HistoryItem`] - A result recorded in the local history

pub mod history_item;
pub mod shorten;

pub use history_item::HistoryItem;
pub use shorten::{ShortenForm, ShortenRequest, ShortenResult};
