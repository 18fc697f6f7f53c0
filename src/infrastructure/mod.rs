//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the shortening backend
//! - [`storage`] - File and in-memory history storage

pub mod http;
pub mod storage;
