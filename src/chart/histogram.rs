//! Order value histogram.
//!
//! Prices are split into equal-width bins over [min, max]. The last bin is
//! closed on the right so the maximum is counted. When every price is the
//! same there is a single bin of width 1 centred on that value.

use super::{escape_xml, ChartConfig};
use crate::utils::error::ChartError;
use log::info;

/// Bin counts over an equal-width partition
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin
    pub lower: f64,

    /// Right edge of the last bin
    pub upper: f64,

    /// Values per bin, left to right
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Bin edges, `counts.len() + 1` of them
    pub fn edges(&self) -> Vec<f64> {
        let bins = self.counts.len() as f64;
        (0..=self.counts.len())
            .map(|i| self.value_at(i as f64 / bins))
            .collect()
    }

    /// Value at fraction `t` of the way from `lower` to `upper`
    fn value_at(&self, t: f64) -> f64 {
        // no `upper - lower` here, it overflows for extreme ranges
        self.lower * (1.0 - t) + self.upper * t
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Partition `values` into `bins` equal-width bins
///
/// **Public** - main entry point for histogram binning
///
/// # Errors
/// * `ChartError::EmptySeries` - no values
/// * `ChartError::ZeroBins` - `bins` is zero
pub fn build_histogram(values: &[f64], bins: usize) -> Result<Histogram, ChartError> {
    if values.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if bins == 0 {
        return Err(ChartError::ZeroBins);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(Histogram {
            lower: min - 0.5,
            upper: max + 0.5,
            counts: vec![values.len() as u64],
        });
    }

    // Halved so the span stays finite even for values near f64::MAX
    let half_span = max / 2.0 - min / 2.0;
    let mut counts = vec![0u64; bins];
    for value in values {
        let fraction = (value / 2.0 - min / 2.0) / half_span;
        let slot = ((fraction * bins as f64) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    Ok(Histogram {
        lower: min,
        upper: max,
        counts,
    })
}

/// Render a histogram as a standalone SVG document
///
/// **Public** - output goes to `output::write_svg`
pub fn render_histogram_svg(histogram: &Histogram, config: &ChartConfig) -> String {
    let width = config.width as f64;
    let height = config.height as f64;
    let (left, right, top, bottom) = (70.0, 20.0, 50.0, 60.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;
    let base_y = top + plot_h;

    let max_count = histogram.max_count().max(1) as f64;
    let bar_w = plot_w / histogram.counts.len() as f64;

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(r#"<style>text { font: 12px sans-serif; } .bar:hover { opacity: 0.8; }</style>"#);
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

    // Bars
    let edges = histogram.edges();
    for (i, &count) in histogram.counts.iter().enumerate() {
        let bar_h = count as f64 / max_count * plot_h;
        let x = left + bar_w * i as f64;
        svg.push_str(&format!(
            r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="#1f77b4" stroke="white" stroke-width="0.5" class="bar"><title>{:.2} to {:.2}: {} orders</title></rect>"##,
            x,
            base_y - bar_h,
            bar_w,
            bar_h,
            edges[i],
            edges[i + 1],
            count
        ));
    }

    // Axes
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
        left, base_y, left + plot_w, base_y
    ));
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
        left, top, left, base_y
    ));

    // X ticks at six evenly spaced edges
    let ticks = 5;
    for t in 0..=ticks {
        let frac = t as f64 / ticks as f64;
        let x = left + plot_w * frac;
        let value = histogram.value_at(frac);
        svg.push_str(&format!(
            r#"<line x1="{:.2}" y1="{}" x2="{:.2}" y2="{}" stroke="black"/><text x="{:.2}" y="{}" text-anchor="middle">{:.0}</text>"#,
            x,
            base_y,
            x,
            base_y + 5.0,
            x,
            base_y + 20.0,
            value
        ));
    }

    // Y ticks: zero and the tallest bar
    for count in [0, histogram.max_count()] {
        let y = base_y - count as f64 / max_count * plot_h;
        svg.push_str(&format!(
            r#"<line x1="{}" y1="{:.2}" x2="{}" y2="{:.2}" stroke="black"/><text x="{}" y="{:.2}" text-anchor="end" dy="4">{}</text>"#,
            left - 5.0,
            y,
            left,
            y,
            left - 8.0,
            y,
            count
        ));
    }

    // Axis labels
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
        left + plot_w / 2.0,
        height - 15.0,
        escape_xml(&config.x_label)
    ));
    svg.push_str(&format!(
        r#"<text x="18" y="{}" text-anchor="middle" transform="rotate(-90 18 {})">{}</text>"#,
        top + plot_h / 2.0,
        top + plot_h / 2.0,
        escape_xml(&config.y_label)
    ));

    svg.push_str("</svg>");

    info!(
        "Histogram rendered: {} bins, {} orders ({} bytes)",
        histogram.counts.len(),
        histogram.total(),
        svg.len()
    );

    svg
}
