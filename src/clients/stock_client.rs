use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog::CatalogError;
use crate::domain::{ProductId, Stock, StockPatch};

/// Client for the stock-level side of the catalog.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<Stock>,
}

crate::impl_basic_client!(StockClient, Stock, ProductId, CatalogError, stock);

impl StockClient {
    /// Reads the current stock, treating an unknown product as an error.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        debug!("Sending request");
        match self.inner.get(id).await {
            Ok(Some(stock)) => Ok(stock),
            Ok(None) => Err(CatalogError::NotFound(id.to_string())),
            Err(e) => Err(CatalogError::from(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, amount: u32) -> Result<Stock, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, StockPatch { amount }).await.map_err(CatalogError::from)
    }
}
