//! Command execution: wire snapshots into a dashboard service and render JSON.

use anyhow::Context;
use chrono::Utc;
use serde_json::Value;

use salesdash_products::{InMemoryProductCatalog, ProductNameLookup};
use salesdash_reporting::{
    Clock, DashboardConfig, DashboardService, FixedClock, InMemoryOrderSource, OrderSource,
};

use crate::args::{Cli, Command};
use crate::snapshot;

/// Load snapshots, build the service and run the selected command.
pub fn run(cli: Cli) -> anyhow::Result<Value> {
    let orders = snapshot::load_orders(&cli.orders)?;
    let catalog = match &cli.products {
        Some(path) => snapshot::load_products(path)?,
        None => InMemoryProductCatalog::new(),
    };

    let mut config = DashboardConfig::from_env();
    if let Some(limit) = cli.limit {
        config = config.with_top_products_limit(limit);
    }

    // Pin "now" once so every widget of one invocation shares the same window.
    let now = cli.now.unwrap_or_else(Utc::now);
    let service = DashboardService::new(InMemoryOrderSource::new(orders), catalog, config)
        .with_clock(FixedClock(now));

    execute(&service, &cli.command)
}

/// Run one dashboard command against an existing service.
pub fn execute<S, L, C>(service: &DashboardService<S, L, C>, command: &Command) -> anyhow::Result<Value>
where
    S: OrderSource,
    L: ProductNameLookup,
    C: Clock,
{
    let value = match command {
        Command::Summary(args) => {
            let summary = service
                .get_summary(&args.period)
                .context("summary failed")?;
            serde_json::to_value(summary)?
        }
        Command::TopProducts(args) => {
            let ranking = service
                .get_top_products(&args.period)
                .context("top products failed")?;
            serde_json::to_value(ranking)?
        }
        Command::SalesOverTime(args) => {
            let series = if args.chronological {
                service.get_sales_over_time_chronological(&args.period.period)
            } else {
                service.get_sales_over_time(&args.period.period)
            }
            .context("sales over time failed")?;
            serde_json::to_value(series)?
        }
        Command::Dashboard(args) => {
            let report = service
                .get_dashboard(&args.period)
                .context("dashboard failed")?;
            serde_json::to_value(report)?
        }
    };

    Ok(value)
}
