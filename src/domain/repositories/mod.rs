//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::storage`. Mocks are generated via `mockall` for
//! unit tests.

pub mod history_storage;

pub use history_storage::HistoryStorage;

#[cfg(test)]
pub use history_storage::MockHistoryStorage;
