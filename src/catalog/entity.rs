use crate::actor_framework::Entity;
use crate::domain::{CatalogProduct, ProductId, ProductPatch, Stock, StockPatch};

impl Entity for CatalogProduct {
    type Id = ProductId;
    type Patch = ProductPatch;

    fn id(&self) -> &ProductId { &self.id }

    /// Rejects the reserved id `0`, which the cart treats as "no product".
    fn on_insert(&mut self) -> Result<(), String> {
        if self.id == 0 {
            return Err("product id must be non-zero".to_string());
        }
        Ok(())
    }

    /// Merges the patched display fields over the existing ones.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        self.details.extend(patch.details);
        Ok(())
    }
}

impl Entity for Stock {
    type Id = ProductId;
    type Patch = StockPatch;

    fn id(&self) -> &ProductId { &self.id }

    fn on_insert(&mut self) -> Result<(), String> {
        if self.id == 0 {
            return Err("stock id must be non-zero".to_string());
        }
        Ok(())
    }

    fn on_update(&mut self, patch: StockPatch) -> Result<(), String> {
        self.amount = patch.amount;
        Ok(())
    }
}
