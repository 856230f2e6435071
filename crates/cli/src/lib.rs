//! `salesdash` command-line front end.
//!
//! Loads order and product snapshots exported by the host as JSON, runs one
//! dashboard operation and renders the result as JSON.

pub mod args;
pub mod report;
pub mod snapshot;

pub use args::{Cli, Command, PeriodArgs, SeriesArgs};
pub use report::{execute, run};
