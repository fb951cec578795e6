use serde::{Deserialize, Serialize};

use super::ProductId;

/// Maximum purchasable quantity of a product at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }
}

/// Payload for restocking (or depleting) a product.
#[derive(Debug, Clone, Copy)]
pub struct StockPatch {
    pub amount: u32,
}
