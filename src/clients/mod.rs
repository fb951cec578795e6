//! Typed handles for talking to the catalog actors and the cart actor.

#[macro_use]
pub mod macros;
pub mod cart_client;
pub mod product_client;
pub mod stock_client;

pub use cart_client::*;
pub use product_client::*;
pub use stock_client::*;
