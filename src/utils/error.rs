//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the order history
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read order history: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed order history: {0}")]
    MalformedInput(String),

    #[error("Order #{index}: missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Order #{index}: field '{field}' has non-numeric value {value}")]
    ValueConversion {
        index: usize,
        field: String,
        value: String,
    },
}

/// Errors that can occur while aggregating or summarizing orders
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Order #{index}: cannot read a date from '{timestamp}': {reason}")]
    DateParse {
        index: usize,
        timestamp: String,
        reason: String,
    },

    #[error("No orders to summarize")]
    EmptyDataset,

    #[error("Invalid timeline label: {0}")]
    InvalidLabel(String),

    #[error("Invalid date pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to plot")]
    EmptySeries,

    #[error("Histogram needs at least one bin")]
    ZeroBins,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
