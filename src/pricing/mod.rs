//! Flag-gated pricing rules.
//!
//! Both selectors are pure functions of their input and the current flag
//! state. Every multiplication result is rounded with [`round_currency`].

mod discount;
mod unit_price;

pub use discount::*;
pub use unit_price::*;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amounts carry two decimal places.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds half away from zero to two decimal places (0.505 -> 0.51).
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_is_half_up() {
        assert_eq!(round_currency(dec!(0.505)), dec!(0.51));
        assert_eq!(round_currency(dec!(0.515)), dec!(0.52));
        assert_eq!(round_currency(dec!(23.988)), dec!(23.99));
        assert_eq!(round_currency(dec!(23.984)), dec!(23.98));
        assert_eq!(round_currency(dec!(5400.0000)), dec!(5400.00));
        assert_eq!(round_currency(dec!(5400.0000)).scale(), 2);
    }
}
