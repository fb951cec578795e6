use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Catalog identifier. Zero is never a valid product.
pub type ProductId = u64;

/// Display fields (title, price, image, ...) that the cart carries verbatim
/// without interpreting them.
pub type DisplayFields = serde_json::Map<String, Value>;

/// A product as the catalog service describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: DisplayFields,
}

impl CatalogProduct {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            details: DisplayFields::new(),
        }
    }

    /// Builder-style helper for attaching a display field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Payload for patching a catalog product's display fields.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub details: DisplayFields,
}

/// A line item: a catalog product together with the quantity chosen by the shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub amount: u32,
    #[serde(flatten)]
    pub details: DisplayFields,
}

impl CartItem {
    /// Builds a line item from catalog data. Catalog-supplied `id` or `amount`
    /// keys inside the display fields are dropped so they cannot shadow the
    /// line item's own fields once serialized.
    pub fn from_catalog(product: CatalogProduct, amount: u32) -> Self {
        let CatalogProduct { id, mut details } = product;
        details.remove("id");
        details.remove("amount");
        Self { id, amount, details }
    }

    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }
}
