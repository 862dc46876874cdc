//! Orders-over-time bubble chart.
//!
//! One row per year, one column per month. Marker area is the month's
//! order count times `BUBBLE_SCALE`; empty months get a zero-radius marker
//! so every row still has twelve points.

use super::{escape_xml, year_color, ChartConfig};
use crate::aggregator::MonthlyCounts;
use crate::utils::config::{BUBBLE_SCALE, MARKER_OPACITY};
use crate::utils::error::ChartError;
use chrono::Month;
use log::info;
use std::f64::consts::PI;

/// A single plotted marker
#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint {
    pub year: i32,

    /// 1 = January
    pub month: u32,

    pub count: u64,

    /// Marker area in square points
    pub area: f64,

    pub color: &'static str,
}

impl BubblePoint {
    /// Radius of a circle with this point's area
    pub fn radius(&self) -> f64 {
        (self.area / PI).sqrt()
    }
}

/// Twelve points per year, years ascending
///
/// **Public** - numeric series behind the bubble chart
pub fn bubble_points(counts: &MonthlyCounts) -> Vec<BubblePoint> {
    let Some(first_year) = counts.first_year() else {
        return Vec::new();
    };

    counts
        .as_map()
        .iter()
        .flat_map(|(&year, months)| {
            months.iter().enumerate().map(move |(i, &count)| BubblePoint {
                year,
                month: i as u32 + 1,
                count,
                area: count as f64 * BUBBLE_SCALE,
                color: year_color(year, first_year),
            })
        })
        .collect()
}

/// Render the timeline as a standalone SVG document
///
/// **Public** - output goes to `output::write_svg`
///
/// # Errors
/// * `ChartError::EmptySeries` - no years to plot
pub fn render_timeline_svg(counts: &MonthlyCounts, config: &ChartConfig) -> Result<String, ChartError> {
    let (Some(first_year), Some(last_year)) = (counts.first_year(), counts.last_year()) else {
        return Err(ChartError::EmptySeries);
    };

    let width = config.width as f64;
    let height = config.height as f64;
    let (left, right, top, bottom) = (70.0, 30.0, 60.0, 50.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;

    // Rows are spaced by year value so gaps between years stay visible
    let rows = (last_year - first_year + 1) as f64;
    let col_w = plot_w / 12.0;
    let row_h = plot_h / rows;
    let x_of = |month: u32| left + col_w * (month as f64 - 0.5);
    let y_of = |year: i32| top + plot_h - row_h * ((year - first_year) as f64 + 0.5);

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(r#"<style>text { font: 12px sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="28" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_xml(&config.title)
    ));

    // Frame
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
        left, top, plot_w, plot_h
    ));

    // Month ticks
    for month in 1..=12u32 {
        let label = Month::try_from(month as u8)
            .map(|m| &m.name()[..3])
            .unwrap_or("?");
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
            x_of(month),
            top + plot_h + 20.0,
            label
        ));
    }

    // Year ticks, only for years with data
    for year in counts.years() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.2}" text-anchor="end" dy="4">{}</text>"#,
            left - 8.0,
            y_of(year),
            year
        ));
    }

    // Markers
    let points = bubble_points(counts);
    for point in &points {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}"><title>{} {}: {} orders</title></circle>"#,
            x_of(point.month),
            y_of(point.year),
            point.radius(),
            point.color,
            MARKER_OPACITY,
            point.month,
            point.year,
            point.count
        ));
    }

    svg.push_str("</svg>");

    info!(
        "Timeline rendered: {} years, {} markers ({} bytes)",
        counts.as_map().len(),
        points.len(),
        svg.len()
    );

    Ok(svg)
}
