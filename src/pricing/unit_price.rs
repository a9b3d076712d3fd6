use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::round_currency;
use crate::domain::{categories, Product};
use crate::feature_flags::{FeatureFlag, FlagSource};

/// Multiplier applied to electronics while premium pricing is on.
pub const PREMIUM_MARGIN: Decimal = dec!(1.20);

/// Effective unit price for a base price and category.
///
/// With premium pricing off the base price is returned as is. With it on,
/// electronics get the premium margin and every other category (empty
/// included) keeps its base price.
pub fn effective_price(base_price: Decimal, category: &str, premium_pricing: bool) -> Decimal {
    if premium_pricing && category == categories::ELECTRONICS {
        round_currency(base_price * PREMIUM_MARGIN)
    } else {
        base_price
    }
}

/// Computes display and order prices, reading `PremiumPricing` on every call.
#[derive(Clone)]
pub struct PricingService {
    flags: Arc<dyn FlagSource>,
}

impl PricingService {
    pub fn new(flags: Arc<dyn FlagSource>) -> Self {
        Self { flags }
    }

    pub fn unit_price(&self, product: &Product) -> Decimal {
        let premium = self.flags.is_enabled(FeatureFlag::PremiumPricing);
        effective_price(product.base_price, &product.category, premium)
    }
}
