//! Core data types for order book snapshots.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Price type with ordering support.
pub type Price = OrderedFloat<f64>;

/// Size/quantity type.
pub type Size = f64;

/// Book side of a resting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Resting order to buy.
    Bid,
    /// Resting order to sell.
    Ask,
}

impl Side {
    /// Match side text case-insensitively against `bid` / `ask`.
    pub fn parse(raw: &str) -> Option<Side> {
        if raw.eq_ignore_ascii_case("bid") {
            Some(Side::Bid)
        } else if raw.eq_ignore_ascii_case("ask") {
            Some(Side::Ask)
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Ask => f.write_str("ask"),
        }
    }
}

/// Aggressor direction of a simulated execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Lift asks, cheapest first.
    Buy,
    /// Hit bids, highest first.
    Sell,
}

impl Direction {
    /// Book side whose liquidity this direction consumes.
    #[inline]
    pub fn consumes(self) -> Side {
        match self {
            Direction::Buy => Side::Ask,
            Direction::Sell => Side::Bid,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => f.write_str("buy"),
            Direction::Sell => f.write_str("sell"),
        }
    }
}

/// A single resting order line item.
///
/// Orders are fungible: no identity beyond side, price and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Book side.
    pub side: Side,
    /// Limit price (finite, > 0).
    pub price: f64,
    /// Resting size (finite, > 0).
    pub size: Size,
}

impl Order {
    /// Create a new order.
    pub fn new(side: Side, price: f64, size: Size) -> Self {
        Self { side, price, size }
    }

    /// Price wrapped for total ordering.
    #[inline]
    pub fn ordered_price(&self) -> Price {
        OrderedFloat(self.price)
    }
}

/// Derived market-microstructure metrics for one book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Highest bid price.
    pub best_bid: f64,
    /// Lowest ask price.
    pub best_ask: f64,
    /// (best_bid + best_ask) / 2.
    pub mid_price: f64,
    /// best_ask - best_bid.
    pub spread: f64,
    /// Spread as a percentage of mid.
    pub spread_pct: f64,
    /// Bid size inside the depth window.
    pub bid_depth: Size,
    /// Ask size inside the depth window.
    pub ask_depth: Size,
    /// Average price to buy the target quantity.
    pub vwap_buy: f64,
    /// Average price to sell the target quantity.
    pub vwap_sell: f64,
}
