//! Parsing of typed-in values.
//!
//! Unparseable input is reported as an invalid field so the menu treats it
//! like any other validation failure.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};

/// Parses a money or hours amount.
///
/// # Example
///
/// ```
/// use staff_payroll::cli::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("rate", " 15.50 ").unwrap(), Decimal::new(1550, 2));
/// assert!(parse_amount("rate", "fifteen").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> PayrollResult<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw).map_err(|_| {
        PayrollError::invalid_field(field, format!("'{}' is not a valid number", raw))
    })
}

/// Parses a whole number of months.
pub fn parse_months(field: &str, raw: &str) -> PayrollResult<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().map_err(|_| {
        PayrollError::invalid_field(field, format!("'{}' is not a whole number", raw))
    })
}

/// Parses `raw` with `parse` unless it is blank, which means "keep the current value".
pub fn parse_optional<T>(
    field: &str,
    raw: &str,
    parse: fn(&str, &str) -> PayrollResult<T>,
) -> PayrollResult<Option<T>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse(field, raw).map(Some)
    }
}
