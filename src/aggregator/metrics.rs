//! Summary statistics and frequency rankings.
//!
//! Price statistics are computed over the net price list. Standard deviation
//! is the population form (divide by N). An empty list is an error rather
//! than NaN.

use super::catalog::CatalogTables;
use crate::parser::{PriceSummary, RankedEntry};
use crate::utils::error::AggregateError;
use log::debug;

/// Mean, median and standard deviation of order value
///
/// **Public** - returned from calculate_price_stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PriceStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Orders: {} | Mean: {:.2} | Median: {:.2} | Std: {:.2} | Range: {:.2}..{:.2}",
            self.count, self.mean, self.median, self.std_dev, self.min, self.max
        )
    }

    pub fn to_summary(&self) -> PriceSummary {
        PriceSummary {
            mean: self.mean,
            median: self.median,
            std_dev: self.std_dev,
        }
    }
}

/// Calculate price statistics
///
/// **Public** - main entry point for price statistics
///
/// # Errors
/// * `AggregateError::EmptyDataset` - `prices` is empty
pub fn calculate_price_stats(prices: &[f64]) -> Result<PriceStats, AggregateError> {
    if prices.is_empty() {
        return Err(AggregateError::EmptyDataset);
    }

    let count = prices.len();
    let mean = prices.iter().sum::<f64>() / count as f64;

    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count as f64;

    let stats = PriceStats {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
    };

    debug!("Price stats: {}", stats.summary());

    Ok(stats)
}

/// Distinct counts and top entries of the catalog tables
///
/// **Public** - returned from rank_catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRanking {
    pub distinct_restaurants: usize,
    pub distinct_items: usize,
    pub top_restaurants: Vec<RankedEntry>,
    pub top_items: Vec<RankedEntry>,
}

/// Rank restaurants and items by frequency and keep the top `top_n`
///
/// **Public** - main entry point for ranking
pub fn rank_catalog(tables: &CatalogTables, top_n: usize) -> CatalogRanking {
    CatalogRanking {
        distinct_restaurants: tables.restaurants.len(),
        distinct_items: tables.items.len(),
        top_restaurants: tables.restaurants.top(top_n),
        top_items: tables.items.top(top_n),
    }
}

/// Render a ranking as a boxed text table
///
/// **Public** - console output for the analyze command
pub fn format_ranking_table(title: &str, key_header: &str, entries: &[RankedEntry]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", title));
    lines.push(format!("  ┏━━━━━┳{}┳━━━━━━━━━━━┓", "━".repeat(44)));
    lines.push(format!("  ┃ {:>3} ┃ {:<42} ┃ {:>9} ┃", "#", key_header, "Frequency"));
    lines.push(format!("  ┣━━━━━╋{}╋━━━━━━━━━━━┫", "━".repeat(44)));

    for (rank, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "  ┃ {:>3} ┃ {:<42} ┃ {:>9} ┃",
            rank + 1,
            truncate(&entry.name, 42),
            entry.count
        ));
    }

    lines.push(format!("  ┗━━━━━┻{}┻━━━━━━━━━━━┛", "━".repeat(44)));
    lines.join("\n")
}

/// Shorten `name` to at most `width` characters
///
/// **Private** - char-aware so multi-byte names never split
fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let kept: String = name.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
