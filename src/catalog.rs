//! Catalog queries: which products a shopper sees and at what price.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::Product;
use crate::feature_flags::{FeatureFlag, FlagSource};
use crate::pricing::PricingService;

/// Search criteria. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// A product together with the price shown for it right now.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub product: Product,
    pub price: Decimal,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Whether a product may be shown given `ShowInactiveProducts`.
pub fn is_visible(product: &Product, flags: &dyn FlagSource) -> bool {
    product.is_active || flags.is_enabled(FeatureFlag::ShowInactiveProducts)
}

/// Filters and prices `products`.
///
/// Name matching is a case-sensitive substring test and always applies.
/// Category and price range only apply with `AdvancedProductFilters` on;
/// the price range is checked against the effective price, inclusive.
pub fn query_catalog(
    products: Vec<Product>,
    query: &CatalogQuery,
    flags: &dyn FlagSource,
    pricing: &PricingService,
) -> Vec<PricedProduct> {
    let advanced = flags.is_enabled(FeatureFlag::AdvancedProductFilters);
    let name = non_blank(&query.name);
    let category = if advanced { non_blank(&query.category) } else { None };
    let (min_price, max_price) = if advanced {
        (query.min_price, query.max_price)
    } else {
        (None, None)
    };
    debug!(advanced, ?name, ?category, ?min_price, ?max_price, "Querying catalog");

    products
        .into_iter()
        .filter(|product| is_visible(product, flags))
        .filter(|product| name.map_or(true, |name| product.name.contains(name)))
        .filter(|product| category.map_or(true, |category| product.is_in_category(category)))
        .map(|product| {
            let price = pricing.unit_price(&product);
            PricedProduct { product, price }
        })
        .filter(|priced| min_price.map_or(true, |min| priced.price >= min))
        .filter(|priced| max_price.map_or(true, |max| priced.price <= max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::categories;
    use crate::feature_flags::FlagStore;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn product(id: u64, name: &str, price: Decimal, category: &str, active: bool) -> Product {
        Product {
            id,
            name: name.into(),
            description: String::new(),
            base_price: price,
            category: category.into(),
            stock_quantity: 10,
            is_active: active,
            created_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Notebook Dell", dec!(4500.00), categories::ELECTRONICS, true),
            product(2, "Mouse Logitech", dec!(450.00), categories::PERIPHERALS, true),
            product(4, "Monitor LG", dec!(2800.00), categories::ELECTRONICS, true),
            product(6, "Headset HyperX", dec!(600.00), categories::PERIPHERALS, false),
        ]
    }

    fn run(query: &CatalogQuery, flags: FlagStore) -> Vec<(u64, Decimal)> {
        let flags: Arc<dyn FlagSource> = Arc::new(flags);
        let pricing = PricingService::new(flags.clone());
        query_catalog(catalog(), query, flags.as_ref(), &pricing)
            .into_iter()
            .map(|p| (p.product.id, p.price))
            .collect()
    }

    fn ids(results: Vec<(u64, Decimal)>) -> Vec<u64> {
        results.into_iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn test_inactive_products_hidden_by_default() {
        assert_eq!(ids(run(&CatalogQuery::default(), FlagStore::new())), vec![1, 2, 4]);
        assert_eq!(
            ids(run(&CatalogQuery::default(), FlagStore::with_flags([FeatureFlag::ShowInactiveProducts]))),
            vec![1, 2, 4, 6]
        );
    }

    #[test]
    fn test_name_filter_always_applies() {
        let query = CatalogQuery { name: Some("Mo".into()), ..CatalogQuery::default() };
        assert_eq!(ids(run(&query, FlagStore::new())), vec![2, 4]);

        let case_sensitive = CatalogQuery { name: Some("mouse".into()), ..CatalogQuery::default() };
        assert!(run(&case_sensitive, FlagStore::new()).is_empty());

        let blank = CatalogQuery { name: Some("  ".into()), ..CatalogQuery::default() };
        assert_eq!(ids(run(&blank, FlagStore::new())), vec![1, 2, 4]);
    }

    #[test]
    fn test_advanced_filters_ignored_when_flag_off() {
        let query = CatalogQuery {
            category: Some(categories::PERIPHERALS.into()),
            max_price: Some(dec!(100)),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(run(&query, FlagStore::new())), vec![1, 2, 4]);
    }

    #[test]
    fn test_category_filter_with_advanced_flag() {
        let query = CatalogQuery {
            category: Some(categories::ELECTRONICS.into()),
            ..CatalogQuery::default()
        };
        let flags = FlagStore::with_flags([FeatureFlag::AdvancedProductFilters]);
        assert_eq!(ids(run(&query, flags)), vec![1, 4]);
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        let query = CatalogQuery {
            min_price: Some(dec!(3000.00)),
            max_price: Some(dec!(3360.00)),
            ..CatalogQuery::default()
        };

        let base_only = FlagStore::with_flags([FeatureFlag::AdvancedProductFilters]);
        assert!(run(&query, base_only).is_empty());

        let premium = FlagStore::with_flags([FeatureFlag::AdvancedProductFilters, FeatureFlag::PremiumPricing]);
        assert_eq!(run(&query, premium), vec![(4, dec!(3360.00))]);
    }
}
