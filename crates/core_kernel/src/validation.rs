//! Field validation helpers
//!
//! Small checks shared by every constructor that accepts caller-supplied
//! fields. Each returns the first violation as a [`CoreError::Validation`]
//! naming the field.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Rejects empty or whitespace-only text
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Rejects amounts that are zero or negative
pub fn require_positive(field: &str, amount: Decimal) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::validation(
            field,
            format!("must be greater than 0, got {}", amount),
        ));
    }
    Ok(())
}

/// Converts a wire float into a `Decimal` amount
///
/// Non-positive input is rejected with the value as received. Positive input
/// that `Decimal` can't hold (above `Decimal::MAX`, or so small it would
/// round to zero at 28 decimal places) is out of range.
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal, CoreError> {
    if value.is_nan() || value <= 0.0 {
        return Err(CoreError::validation(
            field,
            format!("must be greater than 0, got {}", value),
        ));
    }
    if value.is_infinite() {
        return Err(CoreError::validation(field, "out of supported range"));
    }

    // f64 Display never uses exponent notation, so this is the shortest exact decimal form
    match Decimal::from_str(&value.to_string()) {
        Ok(amount) if !amount.is_zero() => Ok(amount),
        _ => Err(CoreError::validation(field, "out of supported range")),
    }
}
