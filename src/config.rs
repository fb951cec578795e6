use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Cart runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the serialized cart is stored under
    pub storage_key: String,
    /// Directory for file-backed storage; in-memory storage when unset
    pub storage_dir: Option<PathBuf>,
    /// Bounded mailbox size for every actor
    pub channel_capacity: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CartConfig {
    /// Defaults overridden by `CART_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Reads a JSON config file, then applies `CART_*` environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(key) = lookup("CART_STORAGE_KEY") {
            if key.is_empty() {
                return Err(ConfigError::InvalidValue { name: "CART_STORAGE_KEY", value: key });
            }
            self.storage_key = key;
        }
        if let Some(dir) = lookup("CART_STORAGE_DIR") {
            self.storage_dir = if dir.is_empty() { None } else { Some(PathBuf::from(dir)) };
        }
        if let Some(raw) = lookup("CART_CHANNEL_CAPACITY") {
            self.channel_capacity = match raw.parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(ConfigError::InvalidValue { name: "CART_CHANNEL_CAPACITY", value: raw }),
            };
        }
        Ok(self)
    }

    /// Opens the storage backend this config selects.
    pub fn open_storage(&self) -> Result<Arc<dyn Storage>, StorageError> {
        match &self.storage_dir {
            Some(dir) => Ok(Arc::new(FileStorage::open(dir)?)),
            None => Ok(Arc::new(MemoryStorage::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let config = CartConfig::default()
            .with_overrides(lookup(&[
                ("CART_STORAGE_KEY", "shop:cart"),
                ("CART_STORAGE_DIR", "/tmp/cart"),
                ("CART_CHANNEL_CAPACITY", "8"),
            ]))
            .unwrap();
        assert_eq!(config.storage_key, "shop:cart");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/cart")));
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_invalid_capacity_is_rejected() {
        let err = CartConfig::default()
            .with_overrides(lookup(&[("CART_CHANNEL_CAPACITY", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "CART_CHANNEL_CAPACITY", .. }));
    }

    #[test]
    fn test_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, r#"{"channel_capacity": 4}"#).unwrap();

        let config = CartConfig::from_file(&path).unwrap();
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "channel_capacity = 4").unwrap();

        let err = CartConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
