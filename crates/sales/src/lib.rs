//! Sales order records consumed by the dashboard.
//!
//! Orders arrive here already materialized by the host (no ORM, no lazy
//! loading). This crate only knows how to read them: state classification,
//! processing time, and line quantities.

pub mod order;

pub use order::{MalformedRecord, Order, OrderLine, OrderState};
