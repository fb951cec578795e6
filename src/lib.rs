//! # Cart Store
//!
//! A shopping-cart state manager for a storefront: it tracks the products a
//! shopper has picked, enforces stock limits against a catalog service, and
//! keeps the cart across restarts in a key-value store.
//!
//! ## Pieces
//!
//! - **Domain types** - plain data shared by everyone → [`Cart`], [`CartItem`], [`CatalogProduct`], [`Stock`]
//! - **Catalog service** - generic `ResourceActor`s serving product details and stock levels → [`ProductClient`], [`StockClient`]
//! - **Cart service** - the actor owning the cart; one request at a time → [`CartService`]
//! - **Cart client** - the cloneable handle every consumer holds → [`CartClient`]
//! - **Persistence shim** - string key-value storage → [`MemoryStorage`], [`FileStorage`]
//! - **Notifications** - fixed shopper-facing wording for failures → [`notification::notify`]
//! - **System coordinator** - startup, seeding and shutdown → [`ShopSystem`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use cart_store::{CartConfig, ShopSystem, UpdateProductAmount};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CartConfig::from_env()?;
//! let system = ShopSystem::new(&config, config.open_storage()?);
//!
//! let cart = system.cart.add_product(1).await?;
//! let cart = system.cart.update_product_amount(UpdateProductAmount { product_id: 1, amount: 3 }).await?;
//! let mut updates = system.cart.subscribe();
//! system.cart.remove_product(1).await?;
//! updates.changed().await?;
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Expected Tracing Output
//!
//! ```text
//! INFO cart_service: CartService starting items=0
//! DEBUG add_product{product_id=1}: Sending request
//! DEBUG cart_service:handle_add_product{product_id=1}: Processing add_product request
//! DEBUG cart_service:handle_add_product{product_id=1}:check_stock{id=1}: Sending request
//! DEBUG cart_service:handle_add_product{product_id=1}:get_product{id=1}: Sending request
//! INFO cart_service:handle_add_product{product_id=1}: Cart updated items=1 total_amount=1
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod messages;
pub mod notification;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, ShopSystem};
pub use cart::{CartError, CartOperation, CartService, ValidationReason};
pub use clients::{CartClient, ProductClient, StockClient};
pub use config::CartConfig;
pub use domain::{Cart, CartItem, CatalogProduct, ProductId, Stock, UpdateProductAmount};
pub use storage::{FileStorage, MemoryStorage, Storage};
