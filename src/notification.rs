//! Presentation of cart failures as short-lived shopper notifications.
//!
//! The cart itself reports typed errors; the fixed storefront wording lives
//! only here.

use tracing::warn;

use crate::cart::{CartError, CartOperation};

pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

/// A transient error message shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub message: &'static str,
}

impl From<&CartError> for Notification {
    fn from(error: &CartError) -> Self {
        let message = match error {
            CartError::OutOfStock { .. } => OUT_OF_STOCK,
            CartError::Validation { operation, .. } => match operation {
                CartOperation::AddProduct => ADD_PRODUCT_FAILED,
                CartOperation::RemoveProduct => REMOVE_PRODUCT_FAILED,
                CartOperation::UpdateProductAmount => UPDATE_AMOUNT_FAILED,
            },
        };
        Self { message }
    }
}

/// Emits the notification as a `toast` event; a UI layer subscribes to that target.
pub fn notify(error: &CartError) -> Notification {
    let notification = Notification::from(error);
    warn!(target: "toast", message = notification.message, detail = %error);
    notification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ValidationReason;

    #[test]
    fn test_messages_follow_operation_and_kind() {
        let cases = [
            (CartError::validation(CartOperation::AddProduct, ValidationReason::Catalog("timeout".into())), ADD_PRODUCT_FAILED),
            (CartError::validation(CartOperation::RemoveProduct, ValidationReason::NotInCart(3)), REMOVE_PRODUCT_FAILED),
            (CartError::validation(CartOperation::UpdateProductAmount, ValidationReason::MissingAmount), UPDATE_AMOUNT_FAILED),
            (CartError::OutOfStock { product_id: 1, requested: 10, available: 5 }, OUT_OF_STOCK),
        ];
        for (error, expected) in cases {
            assert_eq!(notify(&error).message, expected);
        }
    }
}
