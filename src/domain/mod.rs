//! Plain data types shared by the catalog, the cart and the persistence layer.

pub mod cart;
pub mod product;
pub mod stock;

pub use cart::*;
pub use product::*;
pub use stock::*;
