//! Feature flags: the closed set of known flags and the capability used to read them.
//!
//! Business code asks a [`FlagSource`] about a [`FeatureFlag`]; string names
//! only appear at the edges (HTTP introspection, configuration files).

mod store;

pub use store::*;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every flag the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureFlag {
    NewDiscountCalculation,
    PremiumPricing,
    ShowInactiveProducts,
    AdvancedProductFilters,
}

/// Human-readable description of what toggling a flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagInfo {
    pub description: &'static str,
    pub old_behavior: &'static str,
    pub new_behavior: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown feature flag: {0}")]
pub struct UnknownFlag(pub String);

impl FeatureFlag {
    pub const COUNT: usize = 4;

    pub const ALL: [FeatureFlag; FeatureFlag::COUNT] = [
        FeatureFlag::NewDiscountCalculation,
        FeatureFlag::PremiumPricing,
        FeatureFlag::ShowInactiveProducts,
        FeatureFlag::AdvancedProductFilters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureFlag::NewDiscountCalculation => "NewDiscountCalculation",
            FeatureFlag::PremiumPricing => "PremiumPricing",
            FeatureFlag::ShowInactiveProducts => "ShowInactiveProducts",
            FeatureFlag::AdvancedProductFilters => "AdvancedProductFilters",
        }
    }

    /// Environment variable that overrides this flag, e.g. `FEATURE_PREMIUM_PRICING`.
    pub fn env_key(self) -> String {
        let mut key = String::from("FEATURE");
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                key.push('_');
            }
            key.push(c.to_ascii_uppercase());
        }
        key
    }

    pub fn info(self) -> FlagInfo {
        match self {
            FeatureFlag::NewDiscountCalculation => FlagInfo {
                description: "Progressive discount calculation (5%, 10%, 15% based on order total)",
                old_behavior: "Fixed 5% discount",
                new_behavior: "Progressive discount: 5% up to 1000, 10% up to 5000, 15% above",
            },
            FeatureFlag::PremiumPricing => FlagInfo {
                description: "Premium pricing for electronics",
                old_behavior: "Product base price",
                new_behavior: "Base price plus a 20% premium margin on electronics",
            },
            FeatureFlag::ShowInactiveProducts => FlagInfo {
                description: "Show inactive products in the catalog",
                old_behavior: "Only active products are listed",
                new_behavior: "All products are listed (active and inactive)",
            },
            FeatureFlag::AdvancedProductFilters => FlagInfo {
                description: "Advanced product filters",
                old_behavior: "Search by name only",
                new_behavior: "Search by name, category and price range",
            },
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flag names are matched ignoring ASCII case.
impl FromStr for FeatureFlag {
    type Err = UnknownFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureFlag::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFlag(s.to_string()))
    }
}

/// Read access to flag state. Implementations must be cheap and safe to call
/// from many requests at once.
pub trait FlagSource: Send + Sync {
    fn is_enabled(&self, flag: FeatureFlag) -> bool;

    /// String-keyed lookup. Unknown names are disabled.
    fn is_enabled_by_name(&self, name: &str) -> bool {
        name.parse::<FeatureFlag>()
            .map(|flag| self.is_enabled(flag))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for flag in FeatureFlag::ALL {
            assert_eq!(flag.name().parse::<FeatureFlag>(), Ok(flag));
        }
        assert_eq!(
            "premium".parse::<FeatureFlag>(),
            Err(UnknownFlag("premium".into()))
        );
    }

    #[test]
    fn test_env_keys() {
        assert_eq!(FeatureFlag::PremiumPricing.env_key(), "FEATURE_PREMIUM_PRICING");
        assert_eq!(
            FeatureFlag::NewDiscountCalculation.env_key(),
            "FEATURE_NEW_DISCOUNT_CALCULATION"
        );
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (position, flag) in FeatureFlag::ALL.into_iter().enumerate() {
            assert_eq!(flag.index(), position);
        }
    }

    #[test]
    fn test_unknown_names_are_disabled() {
        let store = FlagStore::all_enabled();
        assert!(store.is_enabled_by_name("PremiumPricing"));
        assert!(!store.is_enabled_by_name("DoesNotExist"));
        assert!(!store.is_enabled_by_name(""));
    }

    #[test]
    fn test_name_lookup_ignores_case() {
        assert_eq!("premiumpricing".parse::<FeatureFlag>(), Ok(FeatureFlag::PremiumPricing));
        assert_eq!(
            "SHOWINACTIVEPRODUCTS".parse::<FeatureFlag>(),
            Ok(FeatureFlag::ShowInactiveProducts)
        );

        let store = FlagStore::with_flags([FeatureFlag::PremiumPricing]);
        assert!(store.is_enabled_by_name("premiumpricing"));
        assert!(!store.is_enabled_by_name("newdiscountcalculation"));
    }
}
