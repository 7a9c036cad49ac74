//! Snapshot ingestion and validation.
//!
//! This crate handles:
//! - Record parsing (`side,price,size` lines into typed orders)
//! - Book loading (header skip, side bucketing, sorting)
//! - Book validation (non-empty sides, uncrossed top of book)

pub mod record;
pub mod loader;

pub use record::parse_record;
pub use loader::{BookLoader, LoadSummary};
