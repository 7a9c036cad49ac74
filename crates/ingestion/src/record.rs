//! Record parsing.
//!
//! Turns one delimited `side,price,size` line into a validated [`Order`].

use obstats_core::{Error, Order, Result, Side};

/// Field delimiter of the snapshot format.
pub const DELIMITER: char = ',';

/// Parse one record line.
///
/// `line_number` is 1-based and only used for error context. Fields are
/// trimmed before interpretation; anything after the third field is ignored.
pub fn parse_record(line: &str, line_number: usize) -> Result<Order> {
    let mut fields = line.split(DELIMITER).map(str::trim);
    let side_raw = fields.next().unwrap_or("");
    let price_raw = fields.next().unwrap_or("");
    let size_raw = fields.next().unwrap_or("");

    if side_raw.is_empty() || price_raw.is_empty() || size_raw.is_empty() {
        return Err(Error::EmptyField { line: line_number });
    }

    let side = Side::parse(side_raw).ok_or_else(|| Error::UnknownSide {
        line: line_number,
        raw: side_raw.to_string(),
    })?;
    let price = parse_positive(price_raw, "price", line_number)?;
    let size = parse_positive(size_raw, "size", line_number)?;

    Ok(Order::new(side, price, size))
}

/// Parse a decimal that must be finite and strictly positive.
///
/// Zero and negative values are rejected the same way as unparseable text.
fn parse_positive(raw: &str, field: &'static str, line_number: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(Error::invalid_field(line_number, field, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_valid_record() {
        let order = parse_record("bid,99.80,5", 2).unwrap();
        assert_eq!(order.side, Side::Bid);
        assert_relative_eq!(order.price, 99.80);
        assert_relative_eq!(order.size, 5.0);
    }

    #[test]
    fn test_fields_are_trimmed_and_side_case_insensitive() {
        let order = parse_record("  ASK ,\t100.20 , 8 \r", 3).unwrap();
        assert_eq!(order.side, Side::Ask);
        assert_relative_eq!(order.price, 100.20);
        assert_relative_eq!(order.size, 8.0);
    }

    #[test]
    fn test_full_precision_kept() {
        let order = parse_record("ask,100.123456789,0.000001", 2).unwrap();
        assert_eq!(order.price, 100.123456789);
        assert_eq!(order.size, 0.000001);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let order = parse_record("bid,99.5,3,ignored", 2).unwrap();
        assert_relative_eq!(order.size, 3.0);
    }

    #[test]
    fn test_empty_fields() {
        for line in ["bid,,5", ",99.8,5", "bid,99.8,", "bid,99.8", "bid", "  ,  ,  "] {
            let err = parse_record(line, 4).unwrap_err();
            assert!(
                matches!(err, Error::EmptyField { line: 4 }),
                "line {line:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_unknown_side_echoes_raw_text() {
        let err = parse_record("buy,100.00,5", 2).unwrap_err();
        match err {
            Error::UnknownSide { line, raw } => {
                assert_eq!(line, 2);
                assert_eq!(raw, "buy");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_record("Offer,100.00,5", 9).unwrap_err();
        assert!(err.to_string().contains("'Offer'"));
    }

    #[test]
    fn test_invalid_price_names_field_and_value() {
        let err = parse_record("bid,abc,5", 2).unwrap_err();
        match err {
            Error::InvalidField { line, field, raw } => {
                assert_eq!(line, 2);
                assert_eq!(field, "price");
                assert_eq!(raw, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_positive_and_non_finite_rejected() {
        for (line, field) in [
            ("bid,0,5", "price"),
            ("bid,-1.5,5", "price"),
            ("bid,inf,5", "price"),
            ("bid,NaN,5", "price"),
            ("ask,100,0", "size"),
            ("ask,100,-3", "size"),
            ("ask,100,1e400", "size"),
            ("ask,100,5x", "size"),
        ] {
            match parse_record(line, 5).unwrap_err() {
                Error::InvalidField { field: f, .. } => assert_eq!(f, field, "line {line:?}"),
                other => panic!("line {line:?} gave unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_side_checked_before_numbers() {
        let err = parse_record("buy,abc,5", 2).unwrap_err();
        assert!(matches!(err, Error::UnknownSide { .. }));
    }
}
