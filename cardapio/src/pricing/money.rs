//! Money calculation utilities using rust_decimal for precision
//!
//! Quotes are accumulated as `Decimal` and converted to `f64` only when a
//! cart item is built or a total is displayed.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

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

/// Display form used across the menu and the order message: "R$450.00"
pub fn format_brl(value: f64) -> String {
    format!("R${:.2}", to_f64(to_decimal(value)))
}

/// Sum a list of f64 prices without accumulating float error
pub fn sum_prices<I: IntoIterator<Item = f64>>(prices: I) -> f64 {
    let total: Decimal = prices.into_iter().map(to_decimal).sum();
    to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 3.50 (a cupcake) one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(3.5);
        }
        assert_eq!(to_f64(total), 3500.0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3); // 0.005
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded.to_f64().unwrap(), 0.01);

        // 0.004 should round down to 0.00
        let value2 = Decimal::new(4, 3); // 0.004
        let rounded2 = value2.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded2.to_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_to_decimal_non_finite_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(450.0), "R$450.00");
        assert_eq!(format_brl(3.5), "R$3.50");
        assert_eq!(format_brl(469.995), "R$470.00");
    }

    #[test]
    fn test_sum_prices() {
        assert_eq!(sum_prices([450.0, 20.0]), 470.0);
        assert_eq!(sum_prices(std::iter::repeat(0.01).take(100)), 1.0);
        assert_eq!(sum_prices(Vec::new()), 0.0);
    }
}
