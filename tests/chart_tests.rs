use chrono::Month;
use order_insights::aggregator::{MonthlyCounts, TimelineLabel};
use order_insights::chart::{
    bubble_points, build_histogram, render_histogram_svg, render_timeline_svg, year_color,
    ChartConfig,
};
use order_insights::utils::config::{HISTOGRAM_BINS, YEAR_PALETTE};

#[test]
fn test_histogram_default_bins() {
    let prices: Vec<f64> = (0..200).map(|i| 100.0 + i as f64 * 3.5).collect();
    let hist = build_histogram(&prices, HISTOGRAM_BINS).unwrap();

    assert_eq!(hist.counts.len(), 48);
    assert_eq!(hist.total(), 200);
    assert_eq!(hist.edges().len(), 49);
    assert_eq!(hist.lower, 100.0);
}

#[test]
fn test_histogram_all_equal_prices() {
    let hist = build_histogram(&[250.0; 10], HISTOGRAM_BINS).unwrap();
    assert_eq!(hist.counts, vec![10]);

    let svg = render_histogram_svg(&hist, &ChartConfig::histogram());
    assert_eq!(svg.matches("class=\"bar\"").count(), 1);
}

#[test]
fn test_more_years_than_palette_colours() {
    let labels: Vec<TimelineLabel> = (2015..2023)
        .map(|year| TimelineLabel {
            year,
            month: Month::June,
        })
        .collect();
    let counts = MonthlyCounts::from_labels(&labels);
    let points = bubble_points(&counts);

    assert_eq!(points.len(), 8 * 12);
    let color_2020 = points.iter().find(|p| p.year == 2020).unwrap().color;
    assert_eq!(color_2020, YEAR_PALETTE[0]);
    assert_eq!(year_color(2021, 2015), YEAR_PALETTE[1]);

    let svg = render_timeline_svg(&counts, &ChartConfig::timeline()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 96);
}

#[test]
fn test_timeline_marker_area_scales_with_count() {
    let labels = vec![
        TimelineLabel { year: 2023, month: Month::March },
        TimelineLabel { year: 2023, month: Month::March },
        TimelineLabel { year: 2023, month: Month::April },
    ];
    let points = bubble_points(&MonthlyCounts::from_labels(&labels));

    let march = &points[2];
    let april = &points[3];
    assert_eq!(march.area, 2.0 * april.area);
    assert!(march.radius() > april.radius());
    assert_eq!(points[0].radius(), 0.0);
}
