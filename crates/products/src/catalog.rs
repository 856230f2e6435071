use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use salesdash_core::ProductId;

use crate::product::Product;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("product catalog unavailable: {0}")]
    Unavailable(String),
}

/// Resolves product ids to display names.
///
/// Lookups may fail per id; callers decide how a single failure is reported.
pub trait ProductNameLookup: Send + Sync {
    fn product_name(&self, id: ProductId) -> Result<String, LookupError>;
}

impl<L> ProductNameLookup for Arc<L>
where
    L: ProductNameLookup + ?Sized,
{
    fn product_name(&self, id: ProductId) -> Result<String, LookupError> {
        (**self).product_name(id)
    }
}

impl<L> ProductNameLookup for &L
where
    L: ProductNameLookup + ?Sized,
{
    fn product_name(&self, id: ProductId) -> Result<String, LookupError> {
        (**self).product_name(id)
    }
}

impl ProductNameLookup for HashMap<ProductId, String> {
    fn product_name(&self, id: ProductId) -> Result<String, LookupError> {
        self.get(&id).cloned().ok_or(LookupError::UnknownProduct(id))
    }
}

/// In-memory product catalog for tests/dev and snapshot-driven callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    names: HashMap<ProductId, String>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) {
        self.names.insert(product.id, product.name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<Product> for InMemoryProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}

impl ProductNameLookup for InMemoryProductCatalog {
    fn product_name(&self, id: ProductId) -> Result<String, LookupError> {
        self.names.get(&id).cloned().ok_or(LookupError::UnknownProduct(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_products() {
        let id = ProductId::new();
        let catalog: InMemoryProductCatalog = [Product::new(id, "T-shirt S")].into_iter().collect();
        assert_eq!(catalog.product_name(id).unwrap(), "T-shirt S");
    }

    #[test]
    fn unknown_product_is_a_lookup_error() {
        let catalog = InMemoryProductCatalog::new();
        let id = ProductId::new();
        assert_eq!(
            catalog.product_name(id).unwrap_err(),
            LookupError::UnknownProduct(id)
        );
    }

    #[test]
    fn later_snapshot_overrides_name() {
        let id = ProductId::new();
        let mut catalog = InMemoryProductCatalog::new();
        catalog.insert(Product::new(id, "Old name"));
        catalog.insert(Product::new(id, "New name"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.product_name(id).unwrap(), "New name");
    }

    #[test]
    fn plain_map_and_shared_handles_are_lookups() {
        let id = ProductId::new();
        let map: HashMap<ProductId, String> = HashMap::from([(id, "Mug".to_string())]);
        let shared = Arc::new(map);
        assert_eq!(shared.product_name(id).unwrap(), "Mug");
    }

    #[test]
    fn product_snapshot_deserializes() {
        let id = ProductId::new();
        let product: Product =
            serde_json::from_value(serde_json::json!({ "id": id, "name": "Hoodie" })).unwrap();
        assert_eq!(product, Product::new(id, "Hoodie"));
    }
}
