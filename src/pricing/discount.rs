use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::round_currency;
use crate::feature_flags::{FeatureFlag, FlagSource};

/// Upper bound (inclusive) of the 5% progressive tier.
pub const LOWER_TIER_LIMIT: Decimal = dec!(1000);
/// Upper bound (inclusive) of the 10% progressive tier.
pub const MIDDLE_TIER_LIMIT: Decimal = dec!(5000);

/// Which discount branch fired for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountStrategy {
    Fixed,
    ProgressiveLow,
    ProgressiveMid,
    ProgressiveHigh,
}

impl DiscountStrategy {
    /// Progressive tier for an order total. Boundaries belong to the lower tier.
    pub fn progressive_tier(total_amount: Decimal) -> Self {
        if total_amount <= LOWER_TIER_LIMIT {
            DiscountStrategy::ProgressiveLow
        } else if total_amount <= MIDDLE_TIER_LIMIT {
            DiscountStrategy::ProgressiveMid
        } else {
            DiscountStrategy::ProgressiveHigh
        }
    }

    pub fn rate(self) -> Decimal {
        match self {
            DiscountStrategy::Fixed | DiscountStrategy::ProgressiveLow => dec!(0.05),
            DiscountStrategy::ProgressiveMid => dec!(0.10),
            DiscountStrategy::ProgressiveHigh => dec!(0.15),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiscountStrategy::Fixed => "Fixed Discount 5%",
            DiscountStrategy::ProgressiveLow => "Progressive Discount 5%",
            DiscountStrategy::ProgressiveMid => "Progressive Discount 10%",
            DiscountStrategy::ProgressiveHigh => "Progressive Discount 15%",
        }
    }
}

impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount {
    pub amount: Decimal,
    pub strategy: DiscountStrategy,
}

/// Picks a strategy and applies it to the pre-discount total.
pub fn discount_for(total_amount: Decimal, new_discount_calculation: bool) -> Discount {
    let strategy = if new_discount_calculation {
        DiscountStrategy::progressive_tier(total_amount)
    } else {
        DiscountStrategy::Fixed
    };
    Discount {
        amount: round_currency(total_amount * strategy.rate()),
        strategy,
    }
}

/// Computes order discounts, reading `NewDiscountCalculation` on every call.
#[derive(Clone)]
pub struct DiscountService {
    flags: Arc<dyn FlagSource>,
}

impl DiscountService {
    pub fn new(flags: Arc<dyn FlagSource>) -> Self {
        Self { flags }
    }

    pub fn discount(&self, total_amount: Decimal) -> Discount {
        let progressive = self.flags.is_enabled(FeatureFlag::NewDiscountCalculation);
        discount_for(total_amount, progressive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_flags::FlagStore;

    fn service(enabled: bool) -> DiscountService {
        let flags = if enabled {
            FlagStore::with_flags([FeatureFlag::NewDiscountCalculation])
        } else {
            FlagStore::new()
        };
        DiscountService::new(Arc::new(flags))
    }

    #[test]
    fn test_flag_disabled_is_flat_five_percent() {
        let discounts = service(false);
        for total in [dec!(0), dec!(10.10), dec!(1000.00), dec!(1000.01), dec!(5400.00), dec!(99999.99)] {
            let discount = discounts.discount(total);
            assert_eq!(discount.amount, round_currency(total * dec!(0.05)));
            assert_eq!(discount.strategy.label(), "Fixed Discount 5%");
        }
        assert_eq!(discounts.discount(dec!(4500.00)).amount, dec!(225.00));
    }

    #[test]
    fn test_progressive_tiers() {
        let discounts = service(true);
        let cases = [
            (dec!(0.01), "Progressive Discount 5%"),
            (dec!(999.99), "Progressive Discount 5%"),
            (dec!(1000.00), "Progressive Discount 5%"),
            (dec!(1000.01), "Progressive Discount 10%"),
            (dec!(4999.99), "Progressive Discount 10%"),
            (dec!(5000.00), "Progressive Discount 10%"),
            (dec!(5000.01), "Progressive Discount 15%"),
            (dec!(5400.00), "Progressive Discount 15%"),
        ];
        for (total, label) in cases {
            let discount = discounts.discount(total);
            assert_eq!(discount.strategy.label(), label, "total {}", total);
            assert_eq!(discount.amount, round_currency(total * discount.strategy.rate()));
        }
    }

    #[test]
    fn test_boundary_amounts() {
        let discounts = service(true);
        assert_eq!(discounts.discount(dec!(1000.00)).amount, dec!(50.00));
        assert_eq!(discounts.discount(dec!(1000.01)).amount, dec!(100.00));
        assert_eq!(discounts.discount(dec!(5400.00)).amount, dec!(810.00));
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 10.10 * 0.05 = 0.505
        assert_eq!(discount_for(dec!(10.10), false).amount, dec!(0.51));
        // 1000.10 * 0.10 = 100.010
        assert_eq!(discount_for(dec!(1000.10), true).amount, dec!(100.01));
    }

    #[test]
    fn test_zero_total_has_zero_discount() {
        for enabled in [false, true] {
            assert_eq!(service(enabled).discount(Decimal::ZERO).amount, Decimal::ZERO);
        }
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let discounts = service(true);
        let first = discounts.discount(dec!(2500.00));
        assert_eq!(discounts.discount(dec!(2500.00)), first);
        assert_eq!(first.strategy.to_string(), "Progressive Discount 10%");
    }
}
