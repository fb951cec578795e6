//! Key-value persistence shim the cart survives restarts with.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::Cart;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Synchronous string store keyed by name. Values are replaced wholesale.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads the persisted cart. A missing, unreadable or corrupt value yields an
/// empty cart; the latter two are logged.
pub fn load_cart(storage: &dyn Storage, key: &str) -> Cart {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            warn!(key, error = %e, "Could not read persisted cart, starting empty");
            return Cart::new();
        }
    };

    match Cart::from_json(&raw) {
        Ok(cart) => {
            info!(key, items = cart.len(), "Restored persisted cart");
            cart
        }
        Err(e) => {
            warn!(key, error = %e, "Persisted cart is corrupt, starting empty");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cart_defaults_to_empty() {
        let storage = MemoryStorage::new();
        assert!(load_cart(&storage, "cart").is_empty());

        storage.set("cart", "{not json").unwrap();
        assert!(load_cart(&storage, "cart").is_empty());
    }

    #[test]
    fn test_load_cart_reads_line_items() {
        let storage = MemoryStorage::new();
        storage.set("cart", r#"[{"id":1,"amount":2,"title":"Tênis"},{"id":4,"amount":1}]"#).unwrap();

        let cart = load_cart(&storage, "cart");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(1).unwrap().amount, 2);
        assert_eq!(cart.get(1).unwrap().title(), Some("Tênis"));
        assert_eq!(cart.items()[1].id, 4);
    }
}
