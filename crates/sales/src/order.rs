use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salesdash_core::{DomainError, DomainResult, Entity, OrderId, ProductId, ValueObject};

/// Sales order state, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Draft,
    Sale,
    Done,
    Cancel,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Draft => "draft",
            OrderState::Sale => "sale",
            OrderState::Done => "done",
            OrderState::Cancel => "cancel",
        }
    }

    /// Terminal states are the ones an order is "processed" into.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderState::Done | OrderState::Cancel)
    }
}

impl core::fmt::Display for OrderState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a record could not contribute to a derived value.
///
/// This is a per-record condition: callers skip the record for the affected
/// metric and carry on with the rest of the snapshot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("order {0} has no creation timestamp")]
    MissingCreatedAt(OrderId),

    #[error("order {0} has no last-modified timestamp")]
    MissingWriteAt(OrderId),

    #[error("order {0} was last modified before it was created")]
    NegativeProcessingTime(OrderId),
}

/// Order line: product and ordered quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: Decimal,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: Decimal) -> DomainResult<Self> {
        if quantity.is_sign_negative() && !quantity.is_zero() {
            return Err(DomainError::validation(format!(
                "quantity must be non-negative (product {product_id}, quantity {quantity})"
            )));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

impl ValueObject for OrderLine {}

/// A materialized sales order snapshot.
///
/// Timestamps are optional because host records are not guaranteed to carry
/// them; metrics that need a missing timestamp skip the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub write_at: Option<DateTime<Utc>>,
    pub state: OrderState,
    pub total_amount: Decimal,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: OrderId, state: OrderState, total_amount: Decimal) -> Self {
        Self {
            id,
            created_at: None,
            write_at: None,
            state,
            total_amount,
            lines: Vec::new(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_write_at(mut self, write_at: DateTime<Utc>) -> Self {
        self.write_at = Some(write_at);
        self
    }

    pub fn with_line(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Check the invariants serde cannot express (non-negative quantities).
    pub fn validate(&self) -> DomainResult<()> {
        for line in &self.lines {
            if line.quantity.is_sign_negative() && !line.quantity.is_zero() {
                return Err(DomainError::validation(format!(
                    "order {} has a line with negative quantity {}",
                    self.id, line.quantity
                )));
            }
        }
        Ok(())
    }

    /// Sum of the ordered quantities across all lines.
    pub fn total_quantity(&self) -> Decimal {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Elapsed time between creation and last modification.
    pub fn processing_time(&self) -> Result<Duration, MalformedRecord> {
        let created_at = self
            .created_at
            .ok_or(MalformedRecord::MissingCreatedAt(self.id))?;
        let write_at = self.write_at.ok_or(MalformedRecord::MissingWriteAt(self.id))?;

        let elapsed = write_at - created_at;
        if elapsed < Duration::zero() {
            return Err(MalformedRecord::NegativeProcessingTime(self.id));
        }
        Ok(elapsed)
    }

    /// Processing time in fractional hours.
    pub fn processing_hours(&self) -> Result<f64, MalformedRecord> {
        let elapsed = self.processing_time()?;
        Ok(elapsed.num_milliseconds() as f64 / 3_600_000.0)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
