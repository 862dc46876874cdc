//! Restaurant and item frequency tables.
//!
//! Names are used exactly as exported: "Dosa" and "dosa " are different
//! keys. Ranking is a stable sort on count, so ties keep first-seen order.

use crate::parser::{Order, RankedEntry};
use log::debug;
use std::collections::HashMap;

/// Name -> count mapping that remembers first-seen order
///
/// **Public** - used for both restaurants and items
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Entries in first-seen order
    entries: Vec<RankedEntry>,

    /// Name -> position in `entries`
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `name`, starting at `amount` on first sight
    pub fn add(&mut self, name: &str, amount: u64) {
        match self.index.get(name) {
            Some(&pos) => self.entries[pos].count += amount,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(RankedEntry {
                    name: name.to_string(),
                    count: amount,
                });
            }
        }
    }

    /// Count for `name`, if seen
    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&pos| self.entries[pos].count)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// All entries, highest count first, ties in first-seen order
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` highest-count entries
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Restaurant and item frequency tables for an order sequence
///
/// **Public** - returned from aggregate_catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    /// Restaurant -> number of orders placed there
    pub restaurants: FrequencyTable,

    /// Item -> total quantity ordered
    pub items: FrequencyTable,
}

/// Build restaurant visit counts and item quantity totals
///
/// **Public** - main entry point for catalog aggregation
pub fn aggregate_catalog(orders: &[Order]) -> CatalogTables {
    let mut tables = CatalogTables::default();

    for order in orders {
        tables.restaurants.add(&order.restaurant, 1);

        for item in &order.items {
            tables.items.add(&item.name, item.quantity);
        }
    }

    debug!(
        "Catalog: {} restaurants, {} items",
        tables.restaurants.len(),
        tables.items.len()
    );

    tables
}
