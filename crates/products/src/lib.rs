//! Product records and the product-name lookup boundary.
//!
//! The dashboard never owns the product catalog; it only asks for display
//! names through [`ProductNameLookup`].

pub mod catalog;
pub mod product;

pub use catalog::{InMemoryProductCatalog, LookupError, ProductNameLookup};
pub use product::Product;
