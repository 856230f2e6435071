use thiserror::Error;

use crate::source::SourceError;

/// Result type returned by the dashboard operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The period selector is not one of `week`, `month`, `3months`, `year`.
    #[error("invalid period: {0:?} (expected one of: week, month, 3months, year)")]
    InvalidPeriod(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}
