use std::collections::BTreeMap;

use tracing::{error, info, instrument, warn};

use crate::actor_framework::{FrameworkError, IdSequence, ResourceClient};
use crate::clients::ProductClient;
use crate::domain::{order_total, NewOrder, Order, OrderCreate, OrderItem, Product};
use crate::order_actor::OrderError;
use crate::pricing::{DiscountService, PricingService};
use crate::product_actor::ProductError;

/// Client for interacting with the Order actor.
///
/// This client handles the order workflow: it validates the request and the
/// products, prices every line, discounts the total, reserves stock and
/// persists the order. A rejected order leaves stock untouched.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
    pricing: PricingService,
    discounts: DiscountService,
    item_ids: IdSequence,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        product_client: ProductClient,
        pricing: PricingService,
        discounts: DiscountService,
    ) -> Self {
        Self {
            inner,
            product_client,
            pricing,
            discounts,
            item_ids: IdSequence::starting_at(1),
        }
    }

    #[instrument(skip(self, request), fields(customer = %request.customer_name, lines = request.lines.len()))]
    pub async fn create_order(&self, request: NewOrder) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate request shape
        request.validate().map_err(OrderError::ValidationError)?;

        // Step 2: Validate products
        let products = self.load_active_products(&request).await?;

        // Step 3: Check stock against the snapshot, per product across lines
        let mut reservations: BTreeMap<u64, u32> = BTreeMap::new();
        for line in &request.lines {
            let product = &products[&line.product_id];
            let reserved = reservations.entry(line.product_id).or_insert(0);
            let available = product.stock_quantity - *reserved;
            if available < line.quantity {
                warn!(product_id = product.id, available, requested = line.quantity, "Insufficient stock");
                return Err(OrderError::InsufficientStock(format!(
                    "Insufficient stock for product '{}'. Available: {}",
                    product.name, available
                )));
            }
            *reserved += line.quantity;
        }

        // Step 4: Price every line and discount the total
        let items: Vec<OrderItem> = request
            .lines
            .iter()
            .map(|line| {
                let unit_price = self.pricing.unit_price(&products[&line.product_id]);
                OrderItem::new(self.item_ids.next_id(), line.product_id, line.quantity, unit_price)
            })
            .collect();
        let total_amount = order_total(&items);
        let discount = self.discounts.discount(total_amount);

        // Step 5: Reserve stock
        let reservations: Vec<(u64, u32)> = reservations.into_iter().collect();
        if let Err(e) = self.product_client.reserve_stock(reservations.clone()).await {
            error!(error = %e, "Stock reservation failed");
            return Err(match e {
                ProductError::InsufficientStock(reason) => OrderError::InsufficientStock(reason),
                ProductError::NotFound(id) => OrderError::InvalidProduct(format!("Product {} was not found", id)),
                other => OrderError::ProductService(other),
            });
        }

        // Step 6: Persist, giving the stock back if that fails
        let payload = OrderCreate {
            customer_name: request.customer_name,
            items,
            discount_amount: discount.amount,
            discount_strategy: discount.strategy.label().to_string(),
        };
        match self.inner.create(payload).await {
            Ok(order) => {
                info!(
                    order_id = order.id,
                    total = %order.total_amount,
                    discount = %order.discount_amount,
                    strategy = %order.discount_strategy,
                    "Order created"
                );
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Order persistence failed, releasing stock");
                if let Err(release_error) = self.product_client.release_stock(reservations).await {
                    error!(error = %release_error, "Stock release failed");
                }
                Err(match e {
                    FrameworkError::Rejected(reason) => OrderError::ValidationError(reason),
                    other => OrderError::from(other),
                })
            }
        }
    }

    /// Fetches an order or reports it missing.
    pub async fn find_order(&self, id: u64) -> Result<Order, OrderError> {
        self.get_order(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// All orders, newest first.
    pub async fn recent_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_orders().await?;
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));
        Ok(orders)
    }

    pub async fn shutdown(&self) -> Result<(), OrderError> {
        self.inner.shutdown().await.map_err(OrderError::from)
    }

    async fn load_active_products(&self, request: &NewOrder) -> Result<BTreeMap<u64, Product>, OrderError> {
        let mut products = BTreeMap::new();
        for id in request.product_ids() {
            match self.product_client.get_product(id).await {
                Ok(Some(product)) if product.is_active => {
                    info!(product_name = %product.name, "Product validation successful");
                    products.insert(id, product);
                }
                Ok(_) => {
                    error!(product_id = id, "Product missing or inactive");
                    return Err(OrderError::InvalidProduct(
                        "One or more products were not found or are inactive".to_string(),
                    ));
                }
                Err(e) => {
                    error!(error = %e, "Product validation failed");
                    return Err(OrderError::ProductService(e));
                }
            }
        }
        Ok(products)
    }
}
