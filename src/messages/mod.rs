use tokio::sync::oneshot;

use crate::cart::CartError;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Messages understood by the cart actor. Each mutation carries a oneshot
/// channel on which the resulting cart (or the rejection) is returned.
#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    UpdateProductAmount {
        update: UpdateProductAmount,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Shutdown,
}
