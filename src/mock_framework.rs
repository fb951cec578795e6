//! # Mock Framework
//!
//! Utilities for testing the cart against a scripted catalog.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] to answer each request by hand.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of spinning up a `ResourceActor`, requests land on a channel the
/// test owns. The test inspects each one and decides the reply, which makes
/// catalog outages and odd answers deterministic to simulate.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Upsert request
pub async fn expect_upsert<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::StockClient;
    use crate::domain::Stock;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Stock>(10);
        let client = StockClient::new(inner);

        let put_task = tokio::spawn({
            let client = client.clone();
            async move { client.put_stock(Stock::new(4, 12)).await }
        });
        let (item, responder) = expect_upsert(&mut receiver).await.expect("Expected Upsert request");
        assert_eq!(item, Stock::new(4, 12));
        responder.send(Ok(())).unwrap();
        assert_eq!(put_task.await.unwrap(), Ok(()));

        let check_task = tokio::spawn(async move { client.check_stock(4).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 4);
        responder.send(Ok(None)).unwrap();
        assert_eq!(check_task.await.unwrap(), Err(crate::catalog::CatalogError::NotFound("4".to_string())));
    }
}
