use tracing::{debug, instrument, warn};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Product, ProductCreate};
use crate::product_actor::{ProductAction, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(|e| match e {
            FrameworkError::Rejected(reason) => ProductError::Invalid(reason),
            other => ProductError::from(other),
        })
    }

    /// Reserves stock for several products in one step: either every
    /// reservation is applied or none is.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, reservations: Vec<(u64, u32)>) -> Result<(), ProductError> {
        debug!("Sending request");
        let actions = reservations
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::ReserveStock(quantity)))
            .collect();
        match self.inner.perform_batch(actions).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::Rejected(reason)) => Err(ProductError::InsufficientStock(reason)),
            Err(FrameworkError::NotFound(id)) => Err(ProductError::NotFound(id)),
            Err(e) => Err(ProductError::from(e)),
        }
    }

    /// Gives back stock taken by [`ProductClient::reserve_stock`].
    #[instrument(skip(self))]
    pub async fn release_stock(&self, reservations: Vec<(u64, u32)>) -> Result<(), ProductError> {
        debug!("Sending request");
        let actions = reservations
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::ReleaseStock(quantity)))
            .collect();
        self.inner.perform_batch(actions).await.map(|_| ()).map_err(|e| {
            warn!(error = %e, "Stock release failed");
            ProductError::from(e)
        })
    }

    pub async fn shutdown(&self) -> Result<(), ProductError> {
        self.inner.shutdown().await.map_err(ProductError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{IdSequence, ResourceActor};
    use crate::domain::categories;
    use rust_decimal_macros::dec;

    async fn start_with_keyboard(stock: u32) -> (ProductClient, u64) {
        let ids = IdSequence::starting_at(1);
        let (actor, inner) = ResourceActor::<Product>::new("products", 10, move || ids.next_id());
        tokio::spawn(actor.run());
        let client = ProductClient::new(inner);
        let product = client
            .create_product(ProductCreate::new("Keyboard", "RGB", dec!(350.00), categories::PERIPHERALS, stock))
            .await
            .unwrap();
        (client, product.id)
    }

    #[tokio::test]
    async fn test_create_get_and_list() {
        let (client, id) = start_with_keyboard(30).await;
        let fetched = client.get_product(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Keyboard");
        assert_eq!(client.get_product(999).await.unwrap(), None);
        assert_eq!(client.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_product_is_rejected() {
        let (client, _) = start_with_keyboard(1).await;
        let err = client
            .create_product(ProductCreate::new("Bad", "", dec!(-5), categories::PERIPHERALS, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_reserve_and_release_stock() {
        let (client, id) = start_with_keyboard(10).await;

        client.reserve_stock(vec![(id, 4), (id, 6)]).await.unwrap();
        assert_eq!(client.get_product(id).await.unwrap().unwrap().stock_quantity, 0);

        let err = client.reserve_stock(vec![(id, 1)]).await.unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock("Insufficient stock for product 'Keyboard'. Available: 0".into())
        );

        client.release_stock(vec![(id, 7)]).await.unwrap();
        assert_eq!(client.get_product(id).await.unwrap().unwrap().stock_quantity, 7);
    }

    #[tokio::test]
    async fn test_reserve_unknown_product_changes_nothing() {
        let (client, id) = start_with_keyboard(10).await;
        let err = client.reserve_stock(vec![(id, 2), (77, 1)]).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound("77".into()));
        assert_eq!(client.get_product(id).await.unwrap().unwrap().stock_quantity, 10);
    }
}
