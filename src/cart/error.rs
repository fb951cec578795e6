use std::fmt;

use thiserror::Error;

use crate::domain::ProductId;

/// The cart mutation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CartOperation::AddProduct => "add product",
            CartOperation::RemoveProduct => "remove product",
            CartOperation::UpdateProductAmount => "update product amount",
        };
        f.write_str(name)
    }
}

/// Why a request was rejected as invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("product id is missing")]
    MissingProductId,
    #[error("amount is missing")]
    MissingAmount,
    #[error("amount must be at least 1")]
    AmountBelowOne,
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),
    #[error("catalog request failed: {0}")]
    Catalog(String),
    #[error("could not persist cart: {0}")]
    Storage(String),
    #[error("cart service unavailable: {0}")]
    Unavailable(String),
}

/// Every way a cart mutation can fail. The cart is left untouched in all cases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("{operation} failed: {reason}")]
    Validation {
        operation: CartOperation,
        reason: ValidationReason,
    },
    #[error("requested {requested} units of product {product_id}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },
}

impl CartError {
    pub fn validation(operation: CartOperation, reason: ValidationReason) -> Self {
        CartError::Validation { operation, reason }
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}
