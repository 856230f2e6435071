use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// Sales dashboard metrics over exported order snapshots.
#[derive(Debug, Parser)]
#[command(name = "salesdash", author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding an array of order records.
    #[arg(long)]
    pub orders: PathBuf,

    /// JSON file holding an array of products (`id`, `name`).
    #[arg(long)]
    pub products: Option<PathBuf>,

    /// Anchor periods at this instant instead of the current time (RFC 3339).
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Number of ranked products (overrides SALESDASH_TOP_PRODUCTS_LIMIT).
    #[arg(long)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Order counts, averages and revenue.
    Summary(PeriodArgs),
    /// Best-selling products by quantity.
    TopProducts(PeriodArgs),
    /// Sales amount per day (or per month for `year`).
    SalesOverTime(SeriesArgs),
    /// All of the above from one snapshot.
    Dashboard(PeriodArgs),
}

#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// One of: week, month, 3months, year.
    #[arg(long)]
    pub period: String,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Sort buckets by date instead of first appearance.
    #[arg(long)]
    pub chronological: bool,
}
