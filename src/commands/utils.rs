use crate::aggregator::extract_timeline;
use crate::output::read_report;
use crate::parser::load_orders;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

/// Validate an order history file without producing a report
pub fn validate_input_file(file_path: &Path) -> Result<()> {
    println!("Validating order history: {}", file_path.display());

    let orders = load_orders(file_path)?;
    let timeline = extract_timeline(&orders).context("Order timestamps are invalid")?;

    println!("✓ Valid order history");
    println!("  Orders: {}", orders.len());
    let first = timeline.iter().min_by_key(|l| (l.year, l.month_index()));
    let last = timeline.iter().max_by_key(|l| (l.year, l.month_index()));
    match (first, last) {
        (Some(first), Some(last)) => println!("  Span: {} to {}", first, last),
        _ => warn!("File contains no orders"),
    }

    Ok(())
}

/// Print the headline numbers of a saved report
pub fn inspect_report(file_path: &Path) -> Result<()> {
    println!("Inspecting report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.version != SCHEMA_VERSION {
        warn!(
            "Report schema v{} differs from current v{}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Generated: {}", report.generated_at);
    println!("  Orders: {}", report.order_count);
    println!("  Net / Gross: {:.2} / {:.2}", report.total_net, report.total_gross);
    println!(
        "  Mean / Median / Std: {:.2} / {:.2} / {:.2}",
        report.price_stats.mean, report.price_stats.median, report.price_stats.std_dev
    );
    println!("  Restaurants tried: {}", report.distinct_restaurants);
    println!("  Items tried: {}", report.distinct_items);
    if let Some(top) = report.top_restaurants.first() {
        println!("  Favourite restaurant: {} ({} orders)", top.name, top.count);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Order Insights v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Spend statistics and charts from a food-delivery order history.");
}
