//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_batch`] to script the
//! actor's replies.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client talks to a channel the test owns instead of a running
/// `ResourceActor`, so each reply (success, rejection, dropped actor) is
/// chosen by the test.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an ActionBatch request
pub async fn expect_batch<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Action)>, Response<Vec<T::ActionResult>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::ActionBatch { actions, respond_to }) => Some((actions, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{categories, Product, ProductCreate};
    use crate::product_actor::{ProductAction, ProductActionResult};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        // Test Create
        let create_task = tokio::spawn(async move {
            let payload = ProductCreate::new("Webcam", "1080p", dec!(550.00), categories::PERIPHERALS, 25);
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Webcam");
        let product = Product {
            id: 1,
            name: payload.name,
            description: payload.description,
            base_price: payload.base_price,
            category: payload.category,
            stock_quantity: payload.stock_quantity,
            is_active: payload.is_active,
            created_at: Utc::now(),
        };
        responder.send(Ok(product.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(product));
    }

    #[tokio::test]
    async fn test_mock_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let batch_task = tokio::spawn(async move {
            client.perform_batch(vec![(1, ProductAction::ReserveStock(2))]).await
        });

        let (actions, responder) = expect_batch(&mut receiver).await.expect("Expected ActionBatch request");
        assert_eq!(actions, vec![(1, ProductAction::ReserveStock(2))]);
        responder.send(Ok(vec![ProductActionResult::ReserveStock(8)])).unwrap();

        assert_eq!(batch_task.await.unwrap(), Ok(vec![ProductActionResult::ReserveStock(8)]));
    }
}
