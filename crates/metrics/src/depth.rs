//! Depth aggregation inside a symmetric price window around mid.

use obstats_core::{Order, Size};
use serde::Serialize;

/// Inclusive price window `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthWindow {
    pub lower: f64,
    pub upper: f64,
}

impl DepthWindow {
    /// Window of ±`depth_pct` percent around `mid`.
    pub fn around(mid: f64, depth_pct: f64) -> Self {
        let frac = depth_pct / 100.0;
        Self {
            lower: mid * (1.0 - frac),
            upper: mid * (1.0 + frac),
        }
    }

    /// Whether a price lies inside the window (bounds included).
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price <= self.upper
    }
}

/// Total size of the orders priced inside the window.
///
/// Applied identically to either side; no side-specific truncation at mid.
pub fn depth_within(orders: &[Order], window: &DepthWindow) -> Size {
    orders
        .iter()
        .filter(|o| window.contains(o.price))
        .map(|o| o.size)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use obstats_core::Side;

    #[test]
    fn test_window_bounds() {
        let window = DepthWindow::around(100.0, 50.0);
        assert_relative_eq!(window.lower, 50.0);
        assert_relative_eq!(window.upper, 150.0);

        let window = DepthWindow::around(100.0, 0.5);
        assert_relative_eq!(window.lower, 99.5, epsilon = 1e-9);
        assert_relative_eq!(window.upper, 100.5, epsilon = 1e-9);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = DepthWindow::around(100.0, 50.0);
        let orders = vec![
            Order::new(Side::Ask, 50.0, 1.0),
            Order::new(Side::Ask, 150.0, 2.0),
            Order::new(Side::Ask, 150.5, 4.0),
            Order::new(Side::Ask, 49.5, 8.0),
        ];
        assert_relative_eq!(depth_within(&orders, &window), 3.0);
    }

    #[test]
    fn test_zero_width_window() {
        let window = DepthWindow::around(100.0, 0.0);
        let orders = vec![
            Order::new(Side::Bid, 99.9, 1.0),
            Order::new(Side::Ask, 100.1, 1.0),
        ];
        assert_eq!(depth_within(&orders, &window), 0.0);
    }

    #[test]
    fn test_bids_above_mid_still_counted() {
        // Window check is purely on price, not on side relative to mid
        let window = DepthWindow::around(100.0, 10.0);
        let orders = vec![Order::new(Side::Bid, 105.0, 7.0)];
        assert_relative_eq!(depth_within(&orders, &window), 7.0);
    }
}
