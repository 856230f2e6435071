//! JSON snapshot loaders for orders and products.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;

use salesdash_products::{InMemoryProductCatalog, Product};
use salesdash_sales::Order;

/// Parse a JSON array of orders and check each record.
pub fn orders_from_reader<R: Read>(reader: R) -> anyhow::Result<Vec<Order>> {
    let orders: Vec<Order> =
        serde_json::from_reader(reader).context("failed to parse order snapshot")?;

    for order in &orders {
        order
            .validate()
            .with_context(|| format!("invalid order {}", order.id))?;
    }

    let undated = orders.iter().filter(|o| o.created_at.is_none()).count();
    if undated > 0 {
        tracing::warn!(undated, "orders without createdAt will not match any period");
    }

    Ok(orders)
}

/// Parse a JSON array of products into a catalog. Later duplicates win.
pub fn products_from_reader<R: Read>(reader: R) -> anyhow::Result<InMemoryProductCatalog> {
    let products: Vec<Product> =
        serde_json::from_reader(reader).context("failed to parse product snapshot")?;
    Ok(products.into_iter().collect())
}

pub fn load_orders(path: &Path) -> anyhow::Result<Vec<Order>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open order snapshot {}", path.display()))?;
    let orders = orders_from_reader(BufReader::new(file))
        .with_context(|| format!("while reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), orders = orders.len(), "order snapshot loaded");
    Ok(orders)
}

pub fn load_products(path: &Path) -> anyhow::Result<InMemoryProductCatalog> {
    let file = File::open(path)
        .with_context(|| format!("failed to open product snapshot {}", path.display()))?;
    let catalog = products_from_reader(BufReader::new(file))
        .with_context(|| format!("while reading {}", path.display()))?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "product snapshot loaded");
    Ok(catalog)
}
