//! In-process catalog/stock service: two `ResourceActor`s the cart reads from.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::ResourceActor;
use crate::clients::{ProductClient, StockClient};
use crate::domain::{CatalogProduct, Stock};

/// Creates the product-details actor and its client.
pub fn new_product_service(buffer_size: usize) -> (ResourceActor<CatalogProduct>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

/// Creates the stock-level actor and its client.
pub fn new_stock_service(buffer_size: usize) -> (ResourceActor<Stock>, StockClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StockClient::new(generic_client))
}
