use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use tracing::info;

use crate::clients::ProductClient;
use crate::domain::{categories, ProductCreate};
use crate::product_actor::ProductError;

/// The demo catalog, oldest first. The headset starts inactive.
pub fn demo_catalog() -> Vec<ProductCreate> {
    let now = Utc::now();
    let days_ago = |days: i64| now - Duration::days(days);

    vec![
        ProductCreate::new(
            "Notebook Dell Inspiron",
            "Notebook Dell Inspiron 15, Intel Core i7, 16GB RAM, 512GB SSD",
            dec!(4500.00),
            categories::ELECTRONICS,
            15,
        )
        .created_at(days_ago(30)),
        ProductCreate::new(
            "Mouse Logitech MX Master",
            "Wireless ergonomic mouse",
            dec!(450.00),
            categories::PERIPHERALS,
            50,
        )
        .created_at(days_ago(25)),
        ProductCreate::new(
            "Teclado Mecânico RGB",
            "Mechanical keyboard with RGB lighting",
            dec!(350.00),
            categories::PERIPHERALS,
            30,
        )
        .created_at(days_ago(20)),
        ProductCreate::new(
            "Monitor LG UltraWide 34\"",
            "34 inch UltraWide monitor, 2560x1080",
            dec!(2800.00),
            categories::ELECTRONICS,
            10,
        )
        .created_at(days_ago(15)),
        ProductCreate::new(
            "Webcam Logitech C920",
            "Full HD 1080p webcam",
            dec!(550.00),
            categories::PERIPHERALS,
            25,
        )
        .created_at(days_ago(10)),
        ProductCreate::new(
            "Headset HyperX Cloud II",
            "Gaming headset with 7.1 surround sound",
            dec!(600.00),
            categories::PERIPHERALS,
            20,
        )
        .inactive()
        .created_at(days_ago(5)),
    ]
}

/// Registers the demo catalog. Returns the number of products created.
pub async fn seed_catalog(products: &ProductClient) -> Result<usize, ProductError> {
    let catalog = demo_catalog();
    let count = catalog.len();
    for payload in catalog {
        let product = products.create_product(payload).await?;
        info!(product_id = product.id, name = %product.name, "Seeded product");
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.iter().filter(|p| !p.is_active).count(), 1);
        assert_eq!(
            catalog.iter().filter(|p| p.category == categories::ELECTRONICS).count(),
            2
        );
        let dates: Vec<_> = catalog.iter().map(|p| p.created_at).collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
