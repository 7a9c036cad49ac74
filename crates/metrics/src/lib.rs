//! Metric computation over a loaded order book.
//!
//! This crate handles:
//! - Top of book (best bid/ask, mid, spread)
//! - Depth inside a percentage window around mid
//! - VWAP walks that consume simulated liquidity
//! - The combined `Stats` snapshot

pub mod depth;
pub mod vwap;
pub mod engine;

pub use depth::{depth_within, DepthWindow};
pub use vwap::{vwap_buy, vwap_fill, vwap_sell, VwapFill};
pub use engine::{compute_stats, mid_price, spread, StatsEngine};
