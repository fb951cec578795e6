use serde::{Deserialize, Serialize};

use super::{CartItem, ProductId};

/// Ordered list of line items, unique by product id, in insertion order.
///
/// Serializes as a bare JSON array, which is also the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the quantities of every line item.
    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Removes the line item with `id`, keeping the others in order.
    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Request payload for setting a line item's quantity.
///
/// `amount` is signed so that a negative request reaches the cart's
/// lower-bound check instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogProduct;

    fn item(id: ProductId, amount: u32) -> CartItem {
        CartItem::from_catalog(CatalogProduct::new(id).with_field("title", format!("Product {id}")), amount)
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::from(vec![item(1, 1), item(2, 3), item(3, 2)]);
        let removed = cart.remove(2).unwrap();
        assert_eq!(removed.amount, 3);
        assert_eq!(cart.items().iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(cart.remove(2).is_none());
    }

    #[test]
    fn test_persisted_form_is_a_json_array() {
        let cart = Cart::from(vec![item(1, 2)]);
        let raw = cart.to_json().unwrap();
        assert_eq!(raw, r#"[{"id":1,"amount":2,"title":"Product 1"}]"#);
        assert_eq!(Cart::from_json(&raw).unwrap(), cart);
        assert_eq!(cart.total_amount(), 2);
    }
}
