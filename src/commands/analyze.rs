//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads and validates the order history
//! 2. Aggregates prices, catalog tables and the timeline
//! 3. Calculates price statistics and rankings
//! 4. Renders charts
//! 5. Writes output files and prints the summary
//!
//! Every aggregate is computed and every chart rendered before anything is
//! printed or written, so a bad record aborts the run without a partial
//! report. Outputs are then written one at a time; if a later write fails,
//! files written before it stay on disk.

use crate::aggregator::{
    aggregate_catalog, aggregate_prices, calculate_price_stats, extract_timeline,
    format_ranking_table, rank_catalog, CatalogRanking, CatalogTables, MonthlyCounts, PriceStats,
    PriceTotals, TimelineLabel,
};
use crate::chart::{build_histogram, render_histogram_svg, render_timeline_svg, ChartConfig};
use crate::output::{write_report, write_svg};
use crate::parser::{load_orders, Order, Report};
use crate::utils::config::{DEFAULT_INPUT_PATH, HISTOGRAM_BINS, SCHEMA_VERSION, TOP_N};
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Order history JSON document
    pub input: PathBuf,

    /// Number of restaurants/items in the ranking tables
    pub top_n: usize,

    /// Number of histogram bins
    pub bins: usize,

    /// Output path for the price histogram (None = skip)
    pub histogram_svg: Option<PathBuf>,

    /// Output path for the timeline chart (None = skip)
    pub timeline_svg: Option<PathBuf>,

    /// Output path for the JSON report (None = skip)
    pub report_json: Option<PathBuf>,

    /// Chart dimensions in pixels
    pub chart_size: (usize, usize),

    /// Print the console summary
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            top_n: TOP_N,
            bins: HISTOGRAM_BINS,
            histogram_svg: Some(PathBuf::from("artifacts/price_histogram.svg")),
            timeline_svg: Some(PathBuf::from("artifacts/order_timeline.svg")),
            report_json: None,
            chart_size: (960, 540),
            print_summary: true,
        }
    }
}

/// Everything derived from one order history
///
/// **Public** - returned from analyze_orders
#[derive(Debug, Clone)]
pub struct Analysis {
    pub order_count: usize,
    pub prices: PriceTotals,
    pub price_stats: PriceStats,
    pub catalog: CatalogTables,
    pub ranking: CatalogRanking,
    pub timeline: Vec<TimelineLabel>,
    pub monthly: MonthlyCounts,
}

/// Run every aggregate over the loaded orders
///
/// **Public** - the pure core of the analyze command
///
/// # Errors
/// * `AggregateError::DateParse` - an order timestamp has no valid date
/// * `AggregateError::EmptyDataset` - there are no orders
pub fn analyze_orders(orders: &[Order], top_n: usize) -> Result<Analysis, AggregateError> {
    let prices = aggregate_prices(orders);
    let catalog = aggregate_catalog(orders);
    let timeline = extract_timeline(orders)?;

    debug_assert_eq!(prices.price_list.len(), orders.len());
    debug_assert_eq!(timeline.len(), orders.len());

    let price_stats = calculate_price_stats(&prices.price_list)?;
    let ranking = rank_catalog(&catalog, top_n);
    let monthly = MonthlyCounts::from_labels(&timeline);

    Ok(Analysis {
        order_count: orders.len(),
        prices,
        price_stats,
        catalog,
        ranking,
        timeline,
        monthly,
    })
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
pub fn execute_analyze(args: AnalyzeArgs) -> Result<Analysis> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.input.display());

    // Step 1: Load orders
    info!("Step 1/5: Loading orders...");
    let orders = load_orders(&args.input)
        .with_context(|| format!("Failed to load orders from {}", args.input.display()))?;

    // Step 2 + 3: Aggregate and summarize
    info!("Step 2/5: Aggregating {} orders...", orders.len());
    let analysis = analyze_orders(&orders, args.top_n).context("Failed to aggregate orders")?;

    info!("Step 3/5: {}", analysis.price_stats.summary());

    // Step 4: Render charts (if requested)
    let (width, height) = args.chart_size;
    if args.histogram_svg.is_some() || args.timeline_svg.is_some() {
        info!("Step 4/5: Rendering charts...");
    } else {
        info!("Step 4/5: Skipping charts (not requested)");
    }
    let histogram_svg = match &args.histogram_svg {
        Some(_) => {
            let histogram = build_histogram(&analysis.prices.price_list, args.bins)
                .context("Failed to bin order values")?;
            let config = ChartConfig::histogram().with_size(width, height);
            Some(render_histogram_svg(&histogram, &config))
        }
        None => None,
    };
    let timeline_svg = match &args.timeline_svg {
        Some(_) => {
            let config = ChartConfig::timeline().with_size(width, height);
            Some(render_timeline_svg(&analysis.monthly, &config).context("Failed to render timeline")?)
        }
        None => None,
    };

    // Step 5: Write outputs
    info!("Step 5/5: Writing outputs...");
    if let (Some(svg), Some(path)) = (histogram_svg, &args.histogram_svg) {
        write_svg(&svg, path).context("Failed to write price histogram")?;
        info!("✓ Histogram written to: {}", path.display());
    }
    if let (Some(svg), Some(path)) = (timeline_svg, &args.timeline_svg) {
        write_svg(&svg, path).context("Failed to write timeline chart")?;
        info!("✓ Timeline written to: {}", path.display());
    }
    if let Some(path) = &args.report_json {
        let report = build_report(&analysis, &args.input.display().to_string());
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", format_summary(&analysis));
    }

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(analysis)
}

/// Convert an analysis into the JSON report schema
///
/// **Public** - used by execute_analyze and tests
pub fn build_report(analysis: &Analysis, source: &str) -> Report {
    use chrono::Utc;

    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        order_count: analysis.order_count,
        total_net: analysis.prices.total_net,
        total_gross: analysis.prices.total_gross,
        price_stats: analysis.price_stats.to_summary(),
        distinct_restaurants: analysis.ranking.distinct_restaurants,
        distinct_items: analysis.ranking.distinct_items,
        top_restaurants: analysis.ranking.top_restaurants.clone(),
        top_items: analysis.ranking.top_items.clone(),
        monthly_orders: analysis.monthly.as_map().clone(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Console summary of an analysis
///
/// **Public** - printed by execute_analyze
pub fn format_summary(analysis: &Analysis) -> String {
    let ranking = &analysis.ranking;
    let stats = &analysis.price_stats;
    let mut lines = Vec::new();

    lines.push("=".repeat(80));
    lines.push("ORDER HISTORY SUMMARY".to_string());
    lines.push("=".repeat(80));
    lines.push(format!("Orders:                      {}", analysis.order_count));
    lines.push(format!("Number of restaurants tried: {}", ranking.distinct_restaurants));
    lines.push(format!("Number of items tried:       {}", ranking.distinct_items));
    lines.push(String::new());
    lines.push(format_ranking_table("TOP RESTAURANTS", "Restaurant", &ranking.top_restaurants));
    lines.push(String::new());
    lines.push(format_ranking_table("TOP ITEMS", "Item", &ranking.top_items));
    lines.push(String::new());
    lines.push(format!("Total paid (net):    {:.2}", analysis.prices.total_net));
    lines.push(format!("Total gross:         {:.2}", analysis.prices.total_gross));
    lines.push(format!("Saved on discounts:  {:.2}", analysis.prices.total_discount()));
    lines.push(format!("Average order value: {:.2}", stats.mean));
    lines.push(format!("Median order value:  {:.2}", stats.median));
    lines.push(format!("Std order value:     {:.2}", stats.std_dev));
    lines.push("=".repeat(80));

    lines.join("\n")
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.bins == 0 {
        anyhow::bail!("bins must be greater than 0");
    }

    if args.bins > 1000 {
        anyhow::bail!("bins is too large (max 1000)");
    }

    let (width, height) = args.chart_size;
    if width < 200 || height < 150 {
        anyhow::bail!("Chart size must be at least 200x150 pixels");
    }

    debug!("Analyze arguments valid: {:?}", args);

    Ok(())
}
