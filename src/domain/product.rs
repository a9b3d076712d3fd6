use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Category tags known to the catalog. Categories are free-form strings;
/// these are the values business rules compare against.
pub mod categories {
    pub const ELECTRONICS: &str = "Eletrônicos";
    pub const PERIPHERALS: &str = "Periféricos";
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: String,
    pub stock_quantity: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: String,
    pub stock_quantity: u32,
    pub is_active: bool,
    /// Defaults to now when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        base_price: Decimal,
        category: impl Into<String>,
        stock_quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            base_price,
            category: category.into(),
            stock_quantity,
            is_active: true,
            created_at: None,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}
