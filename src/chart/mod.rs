//! Chart generation.
//!
//! Converts aggregate series into standalone SVG documents:
//! - Histogram of order values
//! - Bubble timeline of orders per month and year

pub mod bubble;
pub mod histogram;

use crate::utils::config::YEAR_PALETTE;

// Re-export main types
pub use bubble::{bubble_points, render_timeline_svg, BubblePoint};
pub use histogram::{build_histogram, render_histogram_svg, Histogram};

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 960,
            height: 540,
        }
    }
}

impl ChartConfig {
    /// Defaults for the order value histogram
    pub fn histogram() -> Self {
        Self {
            title: "Distribution of order value".to_string(),
            x_label: "Order value (₹)".to_string(),
            y_label: "Number of orders".to_string(),
            ..Default::default()
        }
    }

    /// Defaults for the orders-over-time chart
    pub fn timeline() -> Self {
        Self {
            title: "Number of orders with time".to_string(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Palette colour for `year`, cycling once the palette runs out
pub fn year_color(year: i32, first_year: i32) -> &'static str {
    let offset = (year - first_year).rem_euclid(YEAR_PALETTE.len() as i32) as usize;
    YEAR_PALETTE[offset]
}

/// Escape text for use inside SVG elements
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
