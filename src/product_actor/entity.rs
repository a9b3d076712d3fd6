use chrono::Utc;
use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = u64;
    type CreatePayload = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects an empty name or a negative base price.
    fn from_create(id: u64, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        if params.base_price < Decimal::ZERO {
            return Err(format!("Base price must not be negative: {}", params.base_price));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            base_price: params.base_price,
            category: params.category,
            stock_quantity: params.stock_quantity,
            is_active: params.is_active,
            created_at: params.created_at.unwrap_or_else(Utc::now),
        })
    }

    /// Handles product-specific actions.
    ///
    /// # Errors
    /// Returns an error if attempting to reserve more stock than available,
    /// or if a release would overflow the stock counter.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::ReserveStock(amount) => {
                if self.stock_quantity >= amount {
                    self.stock_quantity -= amount;
                    Ok(ProductActionResult::ReserveStock(self.stock_quantity))
                } else {
                    Err(format!(
                        "Insufficient stock for product '{}'. Available: {}",
                        self.name, self.stock_quantity
                    ))
                }
            }
            ProductAction::ReleaseStock(amount) => {
                self.stock_quantity = self
                    .stock_quantity
                    .checked_add(amount)
                    .ok_or_else(|| format!("Stock overflow for product '{}'", self.name))?;
                Ok(ProductActionResult::ReleaseStock(self.stock_quantity))
            }
        }
    }
}
