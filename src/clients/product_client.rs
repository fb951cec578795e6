use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog::CatalogError;
use crate::domain::{CatalogProduct, ProductId, ProductPatch};

/// Client for the product-details side of the catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<CatalogProduct>,
}

crate::impl_basic_client!(ProductClient, CatalogProduct, ProductId, CatalogError, product);

impl ProductClient {
    #[instrument(skip(self, patch))]
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<CatalogProduct, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(CatalogError::from)
    }
}
