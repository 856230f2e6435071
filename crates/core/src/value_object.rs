//! Value object trait: equality by value, not identity.
//!
//! Order lines, date ranges and every report the dashboard produces are value
//! objects: they are recomputed on each call and two reports with the same
//! values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Reports are plain data, so they can be handed to any
/// serializer or shared across threads without coordination.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct TimeSeriesEntry {
///     bucket_key: String,
///     amount: Decimal,
/// }
///
/// impl ValueObject for TimeSeriesEntry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
