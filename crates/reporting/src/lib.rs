//! `salesdash-reporting`: the dashboard metrics aggregator.
//!
//! Everything here is a pure computation over an order snapshot:
//! - `period`: named windows (`week`, `month`, `3months`, `year`) resolved to date ranges
//! - `summary`: KPI counters and averages
//! - `ranking`: top-N products by ordered quantity
//! - `series`: sales amounts bucketed by day or month
//!
//! `service` wires those computations to the host collaborators (order source,
//! product names, clock) behind the caller-facing operations.

pub mod clock;
pub mod config;
pub mod error;
pub mod period;
pub mod ranking;
pub mod series;
pub mod service;
pub mod source;
pub mod summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, DashboardConfig};
pub use error::{ReportError, ReportResult};
pub use period::{BucketGranularity, DateRange, Period, resolve_range};
pub use ranking::{ProductRanking, UNKNOWN_PRODUCT_LABEL, order_lines, top_products, top_products_with_placeholder};
pub use series::{TimeSeriesEntry, sales_over_time, sales_over_time_chronological};
pub use service::{DashboardReport, DashboardService};
pub use source::{InMemoryOrderSource, OrderSource, SourceError};
pub use summary::{SummaryMetrics, compute_summary};
