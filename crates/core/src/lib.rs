//! Core types and configuration for order book snapshot analytics.
//!
//! This crate provides shared types used across all other crates:
//! - Order and side types
//! - The validated `OrderBook` snapshot
//! - The `Stats` result record
//! - Configuration structures
//! - Common error types

pub mod book;
pub mod config;
pub mod error;
pub mod types;

pub use book::OrderBook;
pub use config::{Config, LoaderConfig, MetricsConfig};
pub use error::{Error, Result};
pub use types::*;
