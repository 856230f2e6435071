//! Caller-facing dashboard operations.
//!
//! Each operation takes the period selector as the caller sent it, resolves
//! it against the service clock, reads one order snapshot for the resulting
//! range and runs the pure computations over it. The service keeps no state
//! between calls.

use serde::Serialize;

use salesdash_products::ProductNameLookup;
use salesdash_sales::Order;

use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::error::ReportResult;
use crate::period::{DateRange, Period};
use crate::ranking::{ProductRanking, order_lines, top_products_with_placeholder};
use crate::series::{TimeSeriesEntry, sales_over_time, sales_over_time_chronological};
use crate::source::OrderSource;
use crate::summary::{SummaryMetrics, compute_summary};

/// Every dashboard widget, computed from one order snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub period: Period,
    pub range: DateRange,
    pub summary: SummaryMetrics,
    pub top_products: Vec<ProductRanking>,
    pub sales_over_time: Vec<TimeSeriesEntry>,
}

#[derive(Debug)]
pub struct DashboardService<S, L, C = SystemClock>
where
    S: OrderSource,
    L: ProductNameLookup,
    C: Clock,
{
    source: S,
    lookup: L,
    clock: C,
    config: DashboardConfig,
}

impl<S, L> DashboardService<S, L>
where
    S: OrderSource,
    L: ProductNameLookup,
{
    pub fn new(source: S, lookup: L, config: DashboardConfig) -> Self {
        Self {
            source,
            lookup,
            clock: SystemClock,
            config,
        }
    }
}

impl<S, L, C> DashboardService<S, L, C>
where
    S: OrderSource,
    L: ProductNameLookup,
    C: Clock,
{
    /// Replace the clock used to anchor periods.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> DashboardService<S, L, C2> {
        DashboardService {
            source: self.source,
            lookup: self.lookup,
            clock,
            config: self.config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Summary KPIs (`GetSummary`).
    #[tracing::instrument(skip(self))]
    pub fn get_summary(&self, period: &str) -> ReportResult<SummaryMetrics> {
        let (_, _, orders) = self.snapshot(period)?;
        Ok(compute_summary(&orders))
    }

    /// Top products by ordered quantity (`GetTopProducts`).
    #[tracing::instrument(skip(self))]
    pub fn get_top_products(&self, period: &str) -> ReportResult<Vec<ProductRanking>> {
        let (_, _, orders) = self.snapshot(period)?;
        Ok(self.rank(&orders))
    }

    /// Sales amounts per bucket, first-seen bucket order (`GetSalesOverTime`).
    #[tracing::instrument(skip(self))]
    pub fn get_sales_over_time(&self, period: &str) -> ReportResult<Vec<TimeSeriesEntry>> {
        let (period, _, orders) = self.snapshot(period)?;
        Ok(sales_over_time(&orders, period))
    }

    /// Sales amounts per bucket in calendar order.
    #[tracing::instrument(skip(self))]
    pub fn get_sales_over_time_chronological(
        &self,
        period: &str,
    ) -> ReportResult<Vec<TimeSeriesEntry>> {
        let (period, _, orders) = self.snapshot(period)?;
        Ok(sales_over_time_chronological(&orders, period))
    }

    /// All widgets at once, from a single read of the order source.
    #[tracing::instrument(skip(self))]
    pub fn get_dashboard(&self, period: &str) -> ReportResult<DashboardReport> {
        let (period, range, orders) = self.snapshot(period)?;
        Ok(DashboardReport {
            period,
            range,
            summary: compute_summary(&orders),
            top_products: self.rank(&orders),
            sales_over_time: sales_over_time(&orders, period),
        })
    }

    fn rank(&self, orders: &[Order]) -> Vec<ProductRanking> {
        top_products_with_placeholder(
            order_lines(orders),
            &self.lookup,
            self.config.top_products_limit,
            &self.config.unknown_product_label,
        )
    }

    /// Parse the period before touching the source, so a bad selector never
    /// costs a read.
    fn snapshot(&self, period: &str) -> ReportResult<(Period, DateRange, Vec<Order>)> {
        let period: Period = period.parse()?;
        let range = period.resolve(self.clock.now());
        let orders = self.source.orders_created_between(&range)?;

        tracing::info!(
            period = %period,
            start = %range.start,
            end = %range.end,
            orders = orders.len(),
            "loaded order snapshot"
        );

        Ok((period, range, orders))
    }
}
