//! Request and response bodies. Field names are camelCase on the wire and
//! money travels as decimal strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogQuery, PricedProduct};
use crate::domain::{NewOrder, Order, OrderItem, OrderLine};
use crate::feature_flags::FlagInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub stock_quantity: u32,
    pub is_active: bool,
}

impl From<PricedProduct> for ProductResponse {
    fn from(priced: PricedProduct) -> Self {
        let product = priced.product;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: priced.price,
            category: product.category,
            stock_quantity: product.stock_quantity,
            is_active: product.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSearchRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl From<ProductSearchRequest> for CatalogQuery {
    fn from(request: ProductSearchRequest) -> Self {
        Self {
            name: request.name,
            category: request.category,
            min_price: request.min_price,
            max_price: request.max_price,
        }
    }
}

/// Missing `customerName` or `items` are treated as blank so validation
/// reports them with its own messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub items: Option<Vec<OrderItemRequest>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: u64,
    pub quantity: u32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        let lines = request
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| OrderLine { product_id: item.product_id, quantity: item.quantity })
            .collect();
        NewOrder::new(request.customer_name.unwrap_or_default(), lines)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub status: String,
    pub discount_strategy: String,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            order_date: order.order_date,
            total_amount: order.total_amount,
            discount_amount: order.discount_amount,
            final_amount: order.final_amount,
            status: order.status,
            discount_strategy: order.discount_strategy,
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagStatus {
    pub enabled: bool,
    pub description: String,
    pub old_behavior: String,
    pub new_behavior: String,
}

impl FeatureFlagStatus {
    pub fn new(enabled: bool, info: FlagInfo) -> Self {
        Self {
            enabled,
            description: info.description.to_string(),
            old_behavior: info.old_behavior.to_string(),
            new_behavior: info.new_behavior.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlagState {
    pub name: String,
    pub enabled: bool,
}
