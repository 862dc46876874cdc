//! Order history parsing and schema definitions.
//!
//! This module handles:
//! - Reading the exported JSON order history
//! - Validating every record up front
//! - Defining the JSON report schema

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_orders, parse_amount, parse_orders, parse_quantity};
pub use schema::{LineItem, Order, PriceSummary, RankedEntry, Report};
