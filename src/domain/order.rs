use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub const STATUS_PENDING: &str = "Pending";

/// Represents a customer order. Owns its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub status: String,
    /// Label of the discount strategy that fired when the order was placed.
    pub discount_strategy: String,
    pub items: Vec<OrderItem>,
}

/// One line of an order. The unit price is frozen at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Payload for persisting a new order.
///
/// Totals are not part of the payload: the order derives them from its items
/// so the amount invariants hold by construction.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub discount_amount: Decimal,
    pub discount_strategy: String,
}

/// A customer's request to place an order, before any pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLine {
    pub product_id: u64,
    pub quantity: u32,
}

impl NewOrder {
    pub fn new(customer_name: impl Into<String>, lines: Vec<OrderLine>) -> Self {
        Self { customer_name: customer_name.into(), lines }
    }

    /// Checks the request shape; product existence and stock are checked later.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required".to_string());
        }
        if self.lines.is_empty() {
            return Err("Order must contain at least one item".to_string());
        }
        if let Some(line) = self.lines.iter().find(|line| line.quantity == 0) {
            return Err(format!("Quantity for product {} must be positive", line.product_id));
        }
        Ok(())
    }

    /// Distinct product ids in first-seen order.
    pub fn product_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = Vec::new();
        for line in &self.lines {
            if !ids.contains(&line.product_id) {
                ids.push(line.product_id);
            }
        }
        ids
    }
}

impl OrderItem {
    /// Builds a line not yet attached to an order.
    pub fn new(id: u64, product_id: u64, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            id,
            order_id: 0,
            product_id,
            quantity,
            unit_price,
            subtotal: unit_price * Decimal::from(quantity),
        }
    }
}

/// Sum of the line subtotals.
pub fn order_total(items: &[OrderItem]) -> Decimal {
    items.iter().map(|item| item.subtotal).sum()
}

impl Order {
    /// Builds the order from a create payload.
    ///
    /// # Errors
    /// Rejects a blank customer name, an empty item list, zero quantities and
    /// a discount outside `0..=total`.
    pub fn assemble(id: u64, payload: OrderCreate, order_date: DateTime<Utc>) -> Result<Self, String> {
        let lines = payload
            .items
            .iter()
            .map(|item| OrderLine { product_id: item.product_id, quantity: item.quantity })
            .collect();
        NewOrder::new(payload.customer_name.clone(), lines).validate()?;

        let total_amount = order_total(&payload.items);
        if payload.discount_amount < Decimal::ZERO || payload.discount_amount > total_amount {
            return Err(format!(
                "Discount {} is outside the order total {}",
                payload.discount_amount, total_amount
            ));
        }

        let items = payload
            .items
            .into_iter()
            .map(|item| OrderItem { order_id: id, ..item })
            .collect();

        Ok(Self {
            id,
            customer_name: payload.customer_name,
            order_date,
            total_amount,
            discount_amount: payload.discount_amount,
            final_amount: total_amount - payload.discount_amount,
            status: STATUS_PENDING.to_string(),
            discount_strategy: payload.discount_strategy,
            items,
        })
    }
}
