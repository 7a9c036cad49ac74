//! Error types for the order book analytics pipeline.

use crate::types::{Direction, Side};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the order book analytics pipeline.
///
/// Every stage fails fast: the first error aborts the operation that
/// detected it and no partial result is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Input source could not be opened or read.
    #[error("Cannot read source '{source_name}': {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A record has a blank side, price or size field.
    #[error("Line {line} has empty fields")]
    EmptyField { line: usize },

    /// Side text is neither `bid` nor `ask`.
    #[error("Line {line}: unknown order side '{raw}'")]
    UnknownSide { line: usize, raw: String },

    /// Price or size is not a finite positive number.
    #[error("Line {line}: invalid value for field '{field}': '{raw}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        raw: String,
    },

    /// One side of the book has no orders.
    #[error("No {side}s found in source")]
    EmptySide { side: Side },

    /// Best bid is not strictly below best ask.
    #[error("Crossed book: best bid ({best_bid}) >= best ask ({best_ask})")]
    CrossedBook { best_bid: f64, best_ask: f64 },

    /// A VWAP walk ran out of resting volume.
    #[error("Not enough liquidity to {direction} {requested} units (available: {available})")]
    InsufficientLiquidity {
        direction: Direction,
        requested: f64,
        available: f64,
    },

    /// VWAP target quantity is zero, negative or not finite.
    #[error("Target quantity must be finite and > 0, got {qty}")]
    InvalidQuantity { qty: f64 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a source error from any displayable cause.
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Error::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid field error.
    pub fn invalid_field(line: usize, field: &'static str, raw: impl Into<String>) -> Self {
        Error::InvalidField {
            line,
            field,
            raw: raw.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = Error::invalid_field(7, "price", "abc");
        assert_eq!(err.to_string(), "Line 7: invalid value for field 'price': 'abc'");

        let err = Error::EmptySide { side: Side::Ask };
        assert_eq!(err.to_string(), "No asks found in source");

        let err = Error::CrossedBook {
            best_bid: 100.5,
            best_ask: 100.0,
        };
        assert_eq!(err.to_string(), "Crossed book: best bid (100.5) >= best ask (100)");
    }

    #[test]
    fn test_liquidity_message_names_direction() {
        let err = Error::InsufficientLiquidity {
            direction: Direction::Buy,
            requested: 50.0,
            available: 45.0,
        };
        assert_eq!(
            err.to_string(),
            "Not enough liquidity to buy 50 units (available: 45)"
        );
    }
}
