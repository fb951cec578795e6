use std::sync::Arc;

use tracing::{error, info};

use crate::cart::CartService;
use crate::catalog::{new_product_service, new_stock_service, CatalogError};
use crate::clients::{CartClient, ProductClient, StockClient};
use crate::config::CartConfig;
use crate::domain::{CatalogProduct, Stock};
use crate::storage::Storage;

/// Wires the catalog actors and the cart actor together.
///
/// Responsible for starting every actor, seeding the catalog, and shutting
/// everything down in dependency order.
pub struct ShopSystem {
    pub cart: CartClient,
    pub products: ProductClient,
    pub stock: StockClient,
    cart_handle: tokio::task::JoinHandle<()>,
    catalog_handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns all actors on the current tokio runtime.
    pub fn new(config: &CartConfig, storage: Arc<dyn Storage>) -> Self {
        let (product_actor, products) = new_product_service(config.channel_capacity);
        let product_handle = tokio::spawn(product_actor.run());

        let (stock_actor, stock) = new_stock_service(config.channel_capacity);
        let stock_handle = tokio::spawn(stock_actor.run());

        let (cart_service, cart) = CartService::new(config, products.clone(), stock.clone(), storage);
        let cart_handle = tokio::spawn(cart_service.run());

        Self {
            cart,
            products,
            stock,
            cart_handle,
            catalog_handles: vec![product_handle, stock_handle],
        }
    }

    /// Loads catalog entries, each product paired with its stock level.
    pub async fn seed_catalog(&self, entries: Vec<(CatalogProduct, u32)>) -> Result<(), CatalogError> {
        for (product, amount) in entries {
            let id = product.id;
            self.products.put_product(product).await?;
            self.stock.put_stock(Stock::new(id, amount)).await?;
        }
        info!("Catalog seeded");
        Ok(())
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The cart holds catalog clients; stop it first so the catalog
        // actors see their channels close once we drop ours.
        self.cart.shutdown().await;
        if let Err(e) = self.cart_handle.await {
            error!("Cart task failed: {:?}", e);
            return Err(format!("Cart task failed: {:?}", e));
        }

        drop(self.cart);
        drop(self.products);
        drop(self.stock);

        for handle in self.catalog_handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
