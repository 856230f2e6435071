use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesdash_core::ValueObject;
use salesdash_sales::Order;

use crate::period::Period;

/// One point of the sales-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    pub bucket_key: String,
    pub amount: Decimal,
}

impl ValueObject for TimeSeriesEntry {}

/// Sum order amounts per day (`week`, `month`, `3months`) or per month (`year`).
///
/// Buckets come out in the order they are first seen while scanning
/// `orders`, not in calendar order; dashboards built on this endpoint rely on
/// that. Use [`sales_over_time_chronological`] for a sorted series.
/// Orders without a creation timestamp cannot be bucketed and are skipped.
pub fn sales_over_time(orders: &[Order], period: Period) -> Vec<TimeSeriesEntry> {
    let granularity = period.granularity();
    let mut buckets: Vec<TimeSeriesEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        let Some(created_at) = order.created_at else {
            tracing::debug!(order_id = %order.id, "order without creation timestamp skipped for sales series");
            continue;
        };

        let key = granularity.bucket_key(created_at);
        match index.get(&key) {
            Some(&i) => buckets[i].amount += order.total_amount,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(TimeSeriesEntry {
                    bucket_key: key,
                    amount: order.total_amount,
                });
            }
        }
    }

    buckets
}

/// Same buckets as [`sales_over_time`], sorted by bucket key (calendar order).
pub fn sales_over_time_chronological(orders: &[Order], period: Period) -> Vec<TimeSeriesEntry> {
    let mut buckets = sales_over_time(orders, period);
    // Zero-padded keys sort lexicographically in calendar order.
    buckets.sort_by(|a, b| a.bucket_key.cmp(&b.bucket_key));
    buckets
}
