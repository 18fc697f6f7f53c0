//! Domain layer: data model, validation rules and the traits the client
//! depends on.
//!
//! # Architecture
//!
//! - [`entities`] - Request, result and history item types
//! - [`validation`] - URL checks run before submission
//! - [`timestamp`] - Parsing of backend date-times
//! - [`gateway`] - Trait for the external shortening backend
//! - [`repositories`] - Trait for durable history storage
//!
//! The domain layer has no dependency on HTTP, the file system or the terminal.

pub mod entities;
pub mod gateway;
pub mod repositories;
pub mod timestamp;
pub mod validation;
