//! Money helpers.
//!
//! Amounts are stored as `f64` (that is what the store columns hold) but every
//! sum and product goes through `Decimal` so totals do not drift.

use rust_decimal::prelude::*;

/// Rupee amounts carry at most two decimal places.
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `unit_price * quantity`, rounded.
pub fn line_amount(unit_price: f64, quantity: u32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount_does_not_drift() {
        assert_eq!(line_amount(0.1, 3), 0.3);
        assert_eq!(line_amount(150.0, 3), 450.0);
    }

    #[test]
    fn test_to_f64_rounds_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(12345, 3)), 12.35);
    }
}
