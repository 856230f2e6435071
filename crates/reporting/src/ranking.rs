use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesdash_core::{ProductId, ValueObject};
use salesdash_products::ProductNameLookup;
use salesdash_sales::Order;

/// Display name used when the catalog cannot resolve a ranked product.
pub const UNKNOWN_PRODUCT_LABEL: &str = "Unknown product";

/// One row of the top-products widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRanking {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_quantity: Decimal,
}

impl ValueObject for ProductRanking {}

/// Flatten orders into `(product, quantity)` pairs, in snapshot order.
pub fn order_lines(orders: &[Order]) -> impl Iterator<Item = (ProductId, Decimal)> + '_ {
    orders
        .iter()
        .flat_map(|o| o.lines.iter().map(|l| (l.product_id, l.quantity)))
}

/// Top `limit` products by summed quantity, unresolved names reported as
/// [`UNKNOWN_PRODUCT_LABEL`].
pub fn top_products<I, L>(lines: I, lookup: &L, limit: usize) -> Vec<ProductRanking>
where
    I: IntoIterator<Item = (ProductId, Decimal)>,
    L: ProductNameLookup + ?Sized,
{
    top_products_with_placeholder(lines, lookup, limit, UNKNOWN_PRODUCT_LABEL)
}

/// Top `limit` products by summed quantity.
///
/// Ties keep the order in which products were first seen. A failed name
/// lookup keeps the entry under `placeholder`; it never drops the entry or
/// aborts the ranking.
pub fn top_products_with_placeholder<I, L>(
    lines: I,
    lookup: &L,
    limit: usize,
    placeholder: &str,
) -> Vec<ProductRanking>
where
    I: IntoIterator<Item = (ProductId, Decimal)>,
    L: ProductNameLookup + ?Sized,
{
    // First-seen order is the tie-breaker, so keep totals in a Vec and index them.
    let mut totals: Vec<(ProductId, Decimal)> = Vec::new();
    let mut index: HashMap<ProductId, usize> = HashMap::new();

    for (product_id, quantity) in lines {
        match index.get(&product_id) {
            Some(&i) => totals[i].1 += quantity,
            None => {
                index.insert(product_id, totals.len());
                totals.push((product_id, quantity));
            }
        }
    }

    // Stable sort.
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(limit);

    totals
        .into_iter()
        .map(|(product_id, total_quantity)| {
            let product_name = match lookup.product_name(product_id) {
                Ok(name) => name,
                Err(error) => {
                    tracing::warn!(%product_id, %error, "product name lookup failed; using placeholder");
                    placeholder.to_string()
                }
            };
            ProductRanking {
                product_id,
                product_name,
                total_quantity,
            }
        })
        .collect()
}
