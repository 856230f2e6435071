use std::sync::Arc;

use thiserror::Error;

use salesdash_sales::Order;

use crate::period::DateRange;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("order source unavailable: {0}")]
    Unavailable(String),

    #[error("invalid order record: {0}")]
    InvalidRecord(String),
}

/// Order data provider.
///
/// Implementations return the orders whose creation timestamp falls in
/// `[range.start, range.end)`, as one consistent snapshot.
pub trait OrderSource: Send + Sync {
    fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>, SourceError>;
}

impl<S> OrderSource for Arc<S>
where
    S: OrderSource + ?Sized,
{
    fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>, SourceError> {
        (**self).orders_created_between(range)
    }
}

impl<S> OrderSource for &S
where
    S: OrderSource + ?Sized,
{
    fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>, SourceError> {
        (**self).orders_created_between(range)
    }
}

/// In-memory order source for tests/dev and file-loaded snapshots.
///
/// Keeps insertion order, so results come back in the order orders were added.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderSource {
    orders: Vec<Order>,
}

impl InMemoryOrderSource {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<Order> for InMemoryOrderSource {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl OrderSource for InMemoryOrderSource {
    fn orders_created_between(&self, range: &DateRange) -> Result<Vec<Order>, SourceError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.created_at.is_some_and(|ts| range.contains(ts)))
            .cloned()
            .collect())
    }
}
