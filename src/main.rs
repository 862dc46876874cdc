//! Order Insights CLI
//!
//! Reads a food-delivery order history export and reports spend
//! statistics, favourite restaurants and items, and ordering over time.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use order_insights::commands::{
    display_version, execute_analyze, inspect_report, list_orders, validate_args,
    validate_input_file, AnalyzeArgs,
};
use order_insights::utils::config::{DEFAULT_INPUT_PATH, HISTOGRAM_BINS, TOP_N};

/// Order Insights - statistics for your food-delivery habit
#[derive(Parser, Debug)]
#[command(name = "order-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize an order history and render charts
    Analyze {
        /// Order history JSON document
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Number of restaurants/items to rank
        #[arg(long, default_value_t = TOP_N)]
        top: usize,

        /// Number of histogram bins
        #[arg(long, default_value_t = HISTOGRAM_BINS)]
        bins: usize,

        /// Output path for the order value histogram
        #[arg(long, default_value = "artifacts/price_histogram.svg")]
        histogram: PathBuf,

        /// Output path for the orders-over-time chart
        #[arg(long, default_value = "artifacts/order_timeline.svg")]
        timeline: PathBuf,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,

        /// Output path for a JSON report (optional)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value = "960")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "540")]
        height: usize,

        /// Do not print the console summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print every order in the history
    Orders {
        /// Order history JSON document
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,
    },

    /// Check that an order history file is well formed
    Validate {
        /// Order history JSON document
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,
    },

    /// Display a previously written JSON report
    Inspect {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            top,
            bins,
            histogram,
            timeline,
            no_charts,
            report,
            width,
            height,
            quiet,
        } => {
            let args = AnalyzeArgs {
                input,
                top_n: top,
                bins,
                histogram_svg: (!no_charts).then_some(histogram),
                timeline_svg: (!no_charts).then_some(timeline),
                report_json: report,
                chart_size: (width, height),
                print_summary: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Orders { input } => {
            list_orders(&input)?;
        }

        Commands::Validate { input } => {
            validate_input_file(&input)?;
        }

        Commands::Inspect { file } => {
            inspect_report(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
