//! Stats computation engine.
//!
//! Combines top-of-book, depth and VWAP metrics into a single [`Stats`]
//! snapshot. Pure over a read-only book: recomputing is always safe.

use crate::depth::{depth_within, DepthWindow};
use crate::vwap::{vwap_buy, vwap_sell};
use obstats_core::{MetricsConfig, OrderBook, Result, Size, Stats};
use tracing::debug;

/// Stats engine bound to a set of metric parameters.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    config: MetricsConfig,
}

impl StatsEngine {
    /// Create a new stats engine.
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Parameters in use.
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute all metrics for a book.
    ///
    /// Fails if the parameters are invalid or either VWAP walk runs out of
    /// liquidity; no partial stats are returned.
    pub fn compute(&self, book: &OrderBook) -> Result<Stats> {
        self.config.validate()?;

        let best_bid = book.best_bid();
        let best_ask = book.best_ask();
        let mid_price = mid_price(book);
        let spread = spread(book);
        let spread_pct = spread / mid_price * 100.0;

        let window = DepthWindow::around(mid_price, self.config.depth_pct);
        debug!(
            mid_price,
            lower = window.lower,
            upper = window.upper,
            "depth window"
        );
        let bid_depth = depth_within(book.bids(), &window);
        let ask_depth = depth_within(book.asks(), &window);

        let vwap_buy = vwap_buy(book, self.config.target_qty)?;
        let vwap_sell = vwap_sell(book, self.config.target_qty)?;

        Ok(Stats {
            best_bid,
            best_ask,
            mid_price,
            spread,
            spread_pct,
            bid_depth,
            ask_depth,
            vwap_buy,
            vwap_sell,
        })
    }
}

/// Compute stats with explicit parameters.
pub fn compute_stats(book: &OrderBook, depth_pct: f64, target_qty: Size) -> Result<Stats> {
    StatsEngine::new(MetricsConfig {
        depth_pct,
        target_qty,
    })
    .compute(book)
}

/// Arithmetic mean of best bid and best ask.
#[inline]
pub fn mid_price(book: &OrderBook) -> f64 {
    (book.best_bid() + book.best_ask()) / 2.0
}

/// Best ask minus best bid. Always positive for a loaded book.
#[inline]
pub fn spread(book: &OrderBook) -> f64 {
    book.best_ask() - book.best_bid()
}
