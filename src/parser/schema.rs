//! Order record types and the JSON report schema.
//!
//! `Order` and `LineItem` are the validated in-memory form of the input
//! document. `Report` is the structure of JSON files we write to disk;
//! it is versioned to allow future evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One placed order, validated at load time
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique order identifier as exported
    pub id: String,

    /// Restaurant name, exact spelling from the export
    pub restaurant: String,

    /// Raw order timestamp; embeds a `YYYY-MM-DD` date
    pub ordered_at: String,

    /// Restaurant bill before discounts
    pub restaurant_bill: f64,

    /// Delivery charge before discounts
    pub delivery_charge: f64,

    /// Amount actually paid, taken as given
    pub net_total: f64,

    /// Items in this order
    pub items: Vec<LineItem>,
}

impl Order {
    /// Restaurant bill plus delivery charge
    pub fn gross_total(&self) -> f64 {
        self.restaurant_bill + self.delivery_charge
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input document the report was computed from
    pub source: String,

    /// Number of orders analysed
    pub order_count: usize,

    /// Sum of net totals
    pub total_net: f64,

    /// Sum of restaurant bills plus delivery charges
    pub total_gross: f64,

    /// Mean/median/standard deviation of net order value
    pub price_stats: PriceSummary,

    /// Number of distinct restaurant names
    pub distinct_restaurants: usize,

    /// Number of distinct item names
    pub distinct_items: usize,

    /// Most visited restaurants (count = orders placed)
    pub top_restaurants: Vec<RankedEntry>,

    /// Most ordered items (count = summed quantity)
    pub top_items: Vec<RankedEntry>,

    /// Year -> orders per month, January first
    pub monthly_orders: BTreeMap<i32, [u64; 12]>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Price statistics as serialized in the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// A name with its aggregate count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
}
