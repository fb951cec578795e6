use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::cart::operations;
use crate::cart::{CartError, CartOperation, ValidationReason};
use crate::catalog::CatalogError;
use crate::clients::{CartClient, ProductClient, StockClient};
use crate::config::CartConfig;
use crate::domain::{Cart, CatalogProduct, ProductId, Stock, UpdateProductAmount};
use crate::messages::{CartRequest, ServiceResponse};
use crate::storage::{load_cart, Storage};

/// Owns the cart. Requests are handled one at a time, so a mutation's
/// fetch-check-write sequence never interleaves with another's.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    products: ProductClient,
    stock: StockClient,
    storage: Arc<dyn Storage>,
    storage_key: String,
    publisher: watch::Sender<Cart>,
}

impl CartService {
    /// Restores the persisted cart and returns the actor with its client.
    pub fn new(
        config: &CartConfig,
        products: ProductClient,
        stock: StockClient,
        storage: Arc<dyn Storage>,
    ) -> (Self, CartClient) {
        let cart = load_cart(storage.as_ref(), &config.storage_key);
        let (sender, receiver) = mpsc::channel(config.channel_capacity);
        let (publisher, state) = watch::channel(cart.clone());

        let service = Self {
            receiver,
            cart,
            products,
            stock,
            storage,
            storage_key: config.storage_key.clone(),
            publisher,
        };
        (service, CartClient::new(sender, state))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(items = self.cart.len(), "CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct { product_id, respond_to } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    self.handle_remove_product(product_id, respond_to);
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to).await;
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    #[instrument(skip_all, fields(product_id = %product_id))]
    async fn handle_add_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing add_product request");
        let result = self.add_product(product_id).await;
        Self::respond(result, respond_to);
    }

    #[instrument(skip_all, fields(product_id = %product_id))]
    fn handle_remove_product(&mut self, product_id: ProductId, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing remove_product request");
        let result = operations::remove_product(&self.cart, product_id)
            .and_then(|next| self.commit(CartOperation::RemoveProduct, next));
        Self::respond(result, respond_to);
    }

    #[instrument(skip_all, fields(product_id = %update.product_id, amount = %update.amount))]
    async fn handle_update_product_amount(&mut self, update: UpdateProductAmount, respond_to: ServiceResponse<Cart, CartError>) {
        debug!("Processing update_product_amount request");
        let result = self.update_product_amount(update).await;
        Self::respond(result, respond_to);
    }

    async fn add_product(&mut self, product_id: ProductId) -> Result<Cart, CartError> {
        let operation = CartOperation::AddProduct;
        operations::ensure_product_id(operation, product_id)?;

        // Both reads must succeed before the cart is touched.
        let stock = self.fetch_stock(operation, product_id).await?;
        let product = self.fetch_product(operation, product_id).await?;

        let next = operations::add_product(&self.cart, product, &stock)?;
        self.commit(operation, next)
    }

    async fn update_product_amount(&mut self, update: UpdateProductAmount) -> Result<Cart, CartError> {
        let operation = CartOperation::UpdateProductAmount;
        operations::ensure_update_request(&update)?;

        let stock = self.fetch_stock(operation, update.product_id).await?;
        let next = operations::update_product_amount(&self.cart, &update, &stock)?;
        self.commit(operation, next)
    }

    async fn fetch_stock(&self, operation: CartOperation, product_id: ProductId) -> Result<Stock, CartError> {
        self.stock.check_stock(product_id).await
            .map_err(|e| catalog_failure(operation, product_id, e))
    }

    async fn fetch_product(&self, operation: CartOperation, product_id: ProductId) -> Result<CatalogProduct, CartError> {
        match self.products.get_product(product_id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(CartError::validation(operation, ValidationReason::ProductNotFound(product_id))),
            Err(e) => Err(catalog_failure(operation, product_id, e)),
        }
    }

    /// Persists `next`, then makes it the current cart and publishes it.
    /// A failed write leaves both the stored value and the cart as they were.
    fn commit(&mut self, operation: CartOperation, next: Cart) -> Result<Cart, CartError> {
        let raw = next.to_json()
            .map_err(|e| CartError::validation(operation, ValidationReason::Storage(e.to_string())))?;
        self.storage.set(&self.storage_key, &raw)
            .map_err(|e| CartError::validation(operation, ValidationReason::Storage(e.to_string())))?;

        self.cart = next;
        self.publisher.send_replace(self.cart.clone());
        Ok(self.cart.clone())
    }

    fn respond(result: Result<Cart, CartError>, respond_to: ServiceResponse<Cart, CartError>) {
        match &result {
            Ok(cart) => info!(items = cart.len(), total_amount = cart.total_amount(), "Cart updated"),
            Err(e) => warn!(error = %e, "Cart request rejected"),
        }
        let _ = respond_to.send(result);
    }
}

fn catalog_failure(operation: CartOperation, product_id: ProductId, e: CatalogError) -> CartError {
    let reason = match e {
        CatalogError::NotFound(_) => ValidationReason::ProductNotFound(product_id),
        other => ValidationReason::Catalog(other.to_string()),
    };
    CartError::validation(operation, reason)
}
