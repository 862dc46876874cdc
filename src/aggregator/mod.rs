//! Aggregation of order data into totals, tables and statistics.
//!
//! This module transforms the loaded order sequence into:
//! - Net/gross spend totals and the per-order price list
//! - Restaurant and item frequency tables
//! - Month/year timeline labels
//! - Price statistics and frequency rankings

pub mod catalog;
pub mod metrics;
pub mod price;
pub mod timeline;

// Re-export main types and functions
pub use catalog::{aggregate_catalog, CatalogTables, FrequencyTable};
pub use metrics::{calculate_price_stats, format_ranking_table, rank_catalog, CatalogRanking, PriceStats};
pub use price::{aggregate_prices, PriceTotals};
pub use timeline::{extract_timeline, MonthlyCounts, TimelineExtractor, TimelineLabel};
