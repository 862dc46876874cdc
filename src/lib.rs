//! Order Insights
//!
//! Spend statistics and charts from a personal food-delivery
//! order history export.
//!
//! This crate provides the core implementation for the
//! `order-insights` CLI tool: loading, aggregation, statistics,
//! chart rendering and report output.

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
