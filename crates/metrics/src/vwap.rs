//! Volume-weighted average execution price.
//!
//! Simulates filling a target quantity by consuming resting liquidity from
//! the best price outward. The book is only read, never depleted.

use obstats_core::{Direction, Error, OrderBook, Result, Size};
use serde::Serialize;
use tracing::debug;

/// Outcome of a liquidity-consuming walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VwapFill {
    /// Walk direction.
    pub direction: Direction,
    /// Quantity filled (equal to the requested quantity).
    pub quantity: Size,
    /// Volume-weighted average fill price.
    pub avg_price: f64,
    /// Number of orders touched, including a partially filled last one.
    pub orders_touched: usize,
    /// Price of the last order touched.
    pub worst_price: f64,
}

/// Walk one side of the book until `target_qty` is filled.
///
/// Buys lift asks cheapest first; sells hit bids highest first.
pub fn vwap_fill(book: &OrderBook, direction: Direction, target_qty: Size) -> Result<VwapFill> {
    if !target_qty.is_finite() || target_qty <= 0.0 {
        return Err(Error::InvalidQuantity { qty: target_qty });
    }

    let side = direction.consumes();
    let available = book.total_volume(side);
    if target_qty > available {
        return Err(Error::InsufficientLiquidity {
            direction,
            requested: target_qty,
            available,
        });
    }

    let orders = book.side(side);
    let mut remaining = target_qty;
    let mut notional = 0.0;
    let mut orders_touched = 0;
    let mut worst_price = orders[0].price;

    // A quantity within `available` is always filled; any leftover after the
    // last order is summation rounding, not missing volume.
    for order in orders {
        if remaining <= 0.0 {
            break;
        }
        let filled = remaining.min(order.size);
        notional += filled * order.price;
        remaining -= filled;
        orders_touched += 1;
        worst_price = order.price;
    }

    let avg_price = notional / target_qty;
    debug!(%direction, target_qty, avg_price, orders_touched, worst_price, "vwap walk");

    Ok(VwapFill {
        direction,
        quantity: target_qty,
        avg_price,
        orders_touched,
        worst_price,
    })
}

/// Average price to buy `target_qty` from the asks.
pub fn vwap_buy(book: &OrderBook, target_qty: Size) -> Result<f64> {
    vwap_fill(book, Direction::Buy, target_qty).map(|fill| fill.avg_price)
}

/// Average price to sell `target_qty` into the bids.
pub fn vwap_sell(book: &OrderBook, target_qty: Size) -> Result<f64> {
    vwap_fill(book, Direction::Sell, target_qty).map(|fill| fill.avg_price)
}
