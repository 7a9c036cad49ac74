//! Validated, immutable order book snapshot.

use crate::error::{Error, Result};
use crate::types::{Order, Side, Size};
use std::cmp::Reverse;

/// Two-sided order book snapshot.
///
/// Invariants held for the lifetime of the value:
/// - both sides are non-empty
/// - bids are sorted by price descending, asks ascending
/// - best bid < best ask
///
/// There is no mutation API; metric computations borrow it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    bids: Vec<Order>,
    asks: Vec<Order>,
}

impl OrderBook {
    /// Build a book from parsed orders.
    ///
    /// Orders are bucketed by side and stably sorted, so equal prices keep
    /// their order of appearance.
    pub fn from_orders<I>(orders: I) -> Result<Self>
    where
        I: IntoIterator<Item = Order>,
    {
        let (mut bids, mut asks): (Vec<Order>, Vec<Order>) =
            orders.into_iter().partition(|o| o.side == Side::Bid);

        if bids.is_empty() {
            return Err(Error::EmptySide { side: Side::Bid });
        }
        if asks.is_empty() {
            return Err(Error::EmptySide { side: Side::Ask });
        }

        bids.sort_by_key(|o| Reverse(o.ordered_price()));
        asks.sort_by_key(|o| o.ordered_price());

        let best_bid = bids[0].price;
        let best_ask = asks[0].price;
        if best_bid >= best_ask {
            return Err(Error::CrossedBook { best_bid, best_ask });
        }

        Ok(Self { bids, asks })
    }

    /// Bids, best (highest) first.
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Asks, best (lowest) first.
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// Orders on one side, best first.
    pub fn side(&self, side: Side) -> &[Order] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Highest bid price.
    #[inline]
    pub fn best_bid(&self) -> f64 {
        self.bids[0].price
    }

    /// Lowest ask price.
    #[inline]
    pub fn best_ask(&self) -> f64 {
        self.asks[0].price
    }

    /// Sum of sizes resting on one side.
    pub fn total_volume(&self, side: Side) -> Size {
        self.side(side).iter().map(|o| o.size).sum()
    }

    /// Number of orders on both sides.
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Always false; a constructed book has both sides populated.
    pub fn is_empty(&self) -> bool {
        false
    }
}
