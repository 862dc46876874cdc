use order_insights::commands::{
    build_report, execute_analyze, inspect_report, validate_input_file, AnalyzeArgs,
};
use order_insights::output::read_report;
use order_insights::utils::config::SCHEMA_VERSION;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn write_history(dir: &Path) -> std::path::PathBuf {
    let doc = json!([
        {
            "order_id": 1, "restaurant_name": "A", "order_time": "2022-12-31T22:00:00",
            "order_restaurant_bill": "300", "order_delivery_charge": "30", "order_total": 280,
            "order_items": [{"name": "Pizza", "quantity": "1"}]
        },
        {
            "order_id": 2, "restaurant_name": "B", "order_time": "2023-01-05T13:00:00",
            "order_restaurant_bill": "120", "order_delivery_charge": "0", "order_total": 120,
            "order_items": [{"name": "Dosa", "quantity": 2}, {"name": "Coffee", "quantity": 2}]
        },
        {
            "order_id": 3, "restaurant_name": "A", "order_time": "2023-01-20T20:00:00",
            "order_restaurant_bill": "350", "order_delivery_charge": "25", "order_total": 300,
            "order_items": [{"name": "Pizza", "quantity": 2}]
        }
    ]);
    let path = dir.join("history.json");
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}

#[test]
fn test_execute_analyze_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());

    let args = AnalyzeArgs {
        input,
        histogram_svg: Some(dir.path().join("charts/histogram.svg")),
        timeline_svg: Some(dir.path().join("charts/timeline.svg")),
        report_json: Some(dir.path().join("report.json")),
        print_summary: false,
        ..Default::default()
    };

    let analysis = execute_analyze(args).unwrap();
    assert_eq!(analysis.order_count, 3);

    let histogram = std::fs::read_to_string(dir.path().join("charts/histogram.svg")).unwrap();
    assert!(histogram.contains("Distribution of order value"));

    let timeline = std::fs::read_to_string(dir.path().join("charts/timeline.svg")).unwrap();
    assert_eq!(timeline.matches("<circle").count(), 24);

    let report = read_report(dir.path().join("report.json")).unwrap();
    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.order_count, 3);
    assert_eq!(report.total_net, 700.0);
    assert_eq!(report.total_gross, 825.0);
    assert_eq!(report.price_stats.median, 280.0);
    assert_eq!(report.distinct_restaurants, 2);
    assert_eq!(report.top_restaurants[0].name, "A");
    assert_eq!(report.top_items[0].name, "Pizza");
    assert_eq!(report.top_items[0].count, 3);
    assert_eq!(report.monthly_orders[&2023][0], 2);
    assert_eq!(report.monthly_orders[&2022][11], 1);
}

#[test]
fn test_execute_analyze_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());

    let args = AnalyzeArgs {
        input,
        histogram_svg: None,
        timeline_svg: None,
        report_json: None,
        print_summary: false,
        ..Default::default()
    };

    execute_analyze(args).unwrap();
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_bad_date_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!([{
        "order_id": 1, "restaurant_name": "A", "order_time": "soon",
        "order_restaurant_bill": 1, "order_delivery_charge": 0, "order_total": 1,
        "order_items": []
    }]);
    let input = dir.path().join("history.json");
    std::fs::write(&input, doc.to_string()).unwrap();

    let report_path = dir.path().join("report.json");
    let args = AnalyzeArgs {
        input,
        histogram_svg: None,
        timeline_svg: None,
        report_json: Some(report_path.clone()),
        print_summary: false,
        ..Default::default()
    };

    let err = execute_analyze(args).unwrap_err();
    assert!(format!("{:#}", err).contains("soon"));
    assert!(!report_path.exists());
}

#[test]
fn test_empty_history_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("history.json");
    std::fs::write(&input, "[]").unwrap();

    let args = AnalyzeArgs {
        input,
        histogram_svg: None,
        timeline_svg: None,
        print_summary: false,
        ..Default::default()
    };

    let err = execute_analyze(args).unwrap_err();
    assert!(format!("{:#}", err).contains("No orders"));
}

#[test]
fn test_build_report_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());
    let args = AnalyzeArgs {
        input: input.clone(),
        histogram_svg: None,
        timeline_svg: None,
        print_summary: false,
        ..Default::default()
    };

    let analysis = execute_analyze(args).unwrap();
    let report = build_report(&analysis, "history.json");
    assert_eq!(report.source, "history.json");
    assert_eq!(report.top_items.len(), 3);
}

#[test]
fn test_validate_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());

    assert!(validate_input_file(&input).is_ok());
}

#[test]
fn test_validate_input_file_bad_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!([{
        "order_id": 1, "restaurant_name": "A", "order_time": "last tuesday",
        "order_restaurant_bill": 1, "order_delivery_charge": 0, "order_total": 1,
        "order_items": []
    }]);
    let input = dir.path().join("history.json");
    std::fs::write(&input, doc.to_string()).unwrap();

    let err = validate_input_file(&input).unwrap_err();
    assert!(format!("{:#}", err).contains("last tuesday"));
}

#[test]
fn test_inspect_report_written_by_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());
    let report_path = dir.path().join("report.json");

    let args = AnalyzeArgs {
        input,
        histogram_svg: None,
        timeline_svg: None,
        report_json: Some(report_path.clone()),
        print_summary: false,
        ..Default::default()
    };
    execute_analyze(args).unwrap();

    assert!(inspect_report(&report_path).is_ok());
}

#[test]
fn test_inspect_report_rejects_non_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, "not a report").unwrap();

    assert!(inspect_report(&path).is_err());
}

#[test]
fn test_failed_write_keeps_earlier_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_history(dir.path());
    let histogram_path = dir.path().join("histogram.svg");

    // parent of the timeline path is a regular file
    let args = AnalyzeArgs {
        input: input.clone(),
        histogram_svg: Some(histogram_path.clone()),
        timeline_svg: Some(input.join("timeline.svg")),
        report_json: None,
        print_summary: false,
        ..Default::default()
    };

    let err = execute_analyze(args).unwrap_err();
    assert!(format!("{:#}", err).contains("timeline"));
    assert!(histogram_path.exists());
}
