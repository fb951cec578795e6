use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::cart::{CartError, CartOperation, ValidationReason};
use crate::domain::{Cart, ProductId, UpdateProductAmount};
use crate::messages::CartRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// A closed or dropped actor is reported as a validation failure of the operation.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Operation = $operation:expr) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, CartError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| CartError::validation($operation, ValidationReason::Unavailable("Actor closed".to_string())))?;

                response.await.map_err(|_| CartError::validation($operation, ValidationReason::Unavailable("Actor dropped".to_string())))?
            }
        }
    };
}

/// Handle to the cart actor. Cheap to clone; every consumer gets its own copy.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    state: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, state: watch::Receiver<Cart>) -> Self {
        Self { sender, state }
    }

    /// Snapshot of the cart as of the last successful mutation.
    pub fn read(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receiver that observes the full cart after every successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        let mut receiver = self.state.clone();
        receiver.mark_unchanged();
        receiver
    }

    /// Asks the actor to stop once it has drained the requests ahead of this one.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        debug!("Sending request");
        let _ = self.sender.send(CartRequest::Shutdown).await;
    }
}

client_method!(CartClient => fn add_product(product_id: ProductId) -> Cart as CartRequest::AddProduct, Operation = CartOperation::AddProduct);
client_method!(CartClient => fn remove_product(product_id: ProductId) -> Cart as CartRequest::RemoveProduct, Operation = CartOperation::RemoveProduct);
client_method!(CartClient => fn update_product_amount(update: UpdateProductAmount) -> Cart as CartRequest::UpdateProductAmount, Operation = CartOperation::UpdateProductAmount);
