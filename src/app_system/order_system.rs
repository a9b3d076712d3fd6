use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{IdSequence, ResourceActor};
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, Product};
use crate::feature_flags::{FlagSource, FlagStore};
use crate::http::AppState;
use crate::pricing::{DiscountService, PricingService};

const ACTOR_BUFFER: usize = 32;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub pricing: PricingService,
    pub flags: Arc<FlagStore>,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the actors. Must be called inside a tokio runtime.
    pub fn new(flags: Arc<FlagStore>) -> Self {
        let source: Arc<dyn FlagSource> = flags.clone();
        let pricing = PricingService::new(source.clone());
        let discounts = DiscountService::new(source);

        // 1. Product service
        let product_ids = IdSequence::starting_at(1);
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new("products", ACTOR_BUFFER, move || product_ids.next_id());
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Order service, which depends on products and pricing
        let order_ids = IdSequence::starting_at(1);
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new("orders", ACTOR_BUFFER, move || order_ids.next_id());
        let order_client = OrderClient::new(
            order_resource_client,
            product_client.clone(),
            pricing.clone(),
            discounts,
        );
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            product_client,
            pricing,
            flags,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Handler state backed by this system's clients.
    pub fn app_state(&self) -> AppState {
        AppState {
            products: self.product_client.clone(),
            orders: self.order_client.clone(),
            pricing: self.pricing.clone(),
            flags: self.flags.clone(),
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Orders first, then the products they reference.
        if let Err(e) = self.order_client.shutdown().await {
            error!(error = %e, "Order actor did not acknowledge shutdown");
        }
        if let Err(e) = self.product_client.shutdown().await {
            error!(error = %e, "Product actor did not acknowledge shutdown");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
