//! Pure cart rules. Each function takes the current cart plus whatever the
//! catalog reported and returns the next cart; nothing here performs I/O.

use crate::cart::{CartError, CartOperation, ValidationReason};
use crate::domain::{Cart, CartItem, CatalogProduct, ProductId, Stock, UpdateProductAmount};

/// Rejects the "falsy" product id before any catalog round trip.
pub fn ensure_product_id(operation: CartOperation, product_id: ProductId) -> Result<(), CartError> {
    if product_id == 0 {
        return Err(CartError::validation(operation, ValidationReason::MissingProductId));
    }
    Ok(())
}

/// Rejects a missing product id or a zero amount. Zero is not "remove".
pub fn ensure_update_request(update: &UpdateProductAmount) -> Result<(), CartError> {
    let operation = CartOperation::UpdateProductAmount;
    ensure_product_id(operation, update.product_id)?;
    if update.amount == 0 {
        return Err(CartError::validation(operation, ValidationReason::MissingAmount));
    }
    Ok(())
}

/// Increments an existing line item or appends a new one with amount 1.
/// Only the increment is checked against stock; a new line is always added.
pub fn add_product(cart: &Cart, product: CatalogProduct, stock: &Stock) -> Result<Cart, CartError> {
    let product_id = product.id;
    let mut next = cart.clone();

    match next.get_mut(product_id) {
        Some(existing) => {
            let out_of_stock = |requested: i64| CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            };
            let requested = existing.amount.checked_add(1)
                .ok_or_else(|| out_of_stock(i64::from(existing.amount) + 1))?;
            if requested > stock.amount {
                return Err(out_of_stock(i64::from(requested)));
            }
            existing.amount = requested;
        }
        None => next.push(CartItem::from_catalog(product, 1)),
    }
    Ok(next)
}

pub fn remove_product(cart: &Cart, product_id: ProductId) -> Result<Cart, CartError> {
    let operation = CartOperation::RemoveProduct;
    ensure_product_id(operation, product_id)?;

    let mut next = cart.clone();
    next.remove(product_id)
        .ok_or_else(|| CartError::validation(operation, ValidationReason::NotInCart(product_id)))?;
    Ok(next)
}

/// Sets a line item's quantity. Checks run in a fixed order: stock ceiling,
/// lower bound, then presence in the cart.
pub fn update_product_amount(cart: &Cart, update: &UpdateProductAmount, stock: &Stock) -> Result<Cart, CartError> {
    let operation = CartOperation::UpdateProductAmount;
    ensure_update_request(update)?;

    let UpdateProductAmount { product_id, amount } = *update;
    if amount > i64::from(stock.amount) {
        return Err(CartError::OutOfStock {
            product_id,
            requested: amount,
            available: stock.amount,
        });
    }
    if amount < 1 {
        return Err(CartError::validation(operation, ValidationReason::AmountBelowOne));
    }
    // 1 <= amount <= stock.amount, so this always fits.
    let amount = u32::try_from(amount)
        .map_err(|_| CartError::validation(operation, ValidationReason::AmountBelowOne))?;

    let mut next = cart.clone();
    let item = next.get_mut(product_id)
        .ok_or_else(|| CartError::validation(operation, ValidationReason::NotInCart(product_id)))?;
    item.amount = amount;
    Ok(next)
}
