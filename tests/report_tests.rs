// End-to-end pipeline tests: locate → clean → join → aggregate from a downloads directory

mod common;

use chrono::NaiveDate;
use common::*;
use nodereport::config::AppConfig;
use nodereport::error::PipelineError;
use nodereport::filter::DateRange;
use nodereport::models::DowntimeSummary;
use nodereport::report::Report;

fn config_for(dir: &std::path::Path) -> AppConfig {
    AppConfig::load_from_str(&config_toml(dir)).expect("valid config")
}

#[test]
fn build_produces_downtime_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    write_sample_exports(dir.path());

    let report = Report::build(&config_for(dir.path())).unwrap();
    assert_eq!(
        report.get_summary(),
        &[
            DowntimeSummary::new("core-1", 2),
            DowntimeSummary::new("edge-2", 1),
            DowntimeSummary::new("orphan-9", 1),
        ]
    );
    assert_eq!(report.alarm_records(), 5);
    assert_eq!(report.availability_records(), 2);
    assert!(report.alarm_log().ends_with("Alarm_Report_2024-03-06.xlsx"));
    assert!(
        report
            .availability_report()
            .ends_with("Availability_Report_2024-03-06.xlsx")
    );
}

#[test]
fn unmatched_ip_keeps_alarm_with_null_availability() {
    let dir = tempfile::TempDir::new().unwrap();
    write_sample_exports(dir.path());

    let report = Report::build(&config_for(dir.path())).unwrap();
    let orphan = report
        .joined()
        .iter()
        .find(|r| r.node_alias == "orphan-9")
        .expect("orphan alarm kept");
    assert_eq!(orphan.availability, None);
    let core = report
        .joined()
        .iter()
        .find(|r| r.node_alias == "core-1")
        .unwrap();
    assert_eq!(core.availability, Some(99.5));
}

#[test]
fn build_is_idempotent() {
    let dir = tempfile::TempDir::new().unwrap();
    write_sample_exports(dir.path());
    let config = config_for(dir.path());

    let first = Report::build(&config).unwrap();
    let second = Report::build(&config).unwrap();
    assert_eq!(first.get_summary(), second.get_summary());
}

#[test]
fn date_bounds_span_alarm_dates() {
    let dir = tempfile::TempDir::new().unwrap();
    write_sample_exports(dir.path());

    let report = Report::build(&config_for(dir.path())).unwrap();
    let bounds = report.date_bounds();
    assert_eq!(bounds.min_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(bounds.max_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(report.downtime_counts(), vec![1, 2]);
}

#[test]
fn apply_filters_on_snapshot() {
    let dir = tempfile::TempDir::new().unwrap();
    write_sample_exports(dir.path());
    let report = Report::build(&config_for(dir.path())).unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let filtered = report.apply_filters(Some("1-3"), &DateRange::new(Some(day), Some(day)));
    assert_eq!(filtered, vec![DowntimeSummary::new("core-1", 1)]);
    assert_eq!(report.get_summary().len(), 3);
}

#[test]
fn missing_alarm_log_fails_cleanly() {
    let dir = tempfile::TempDir::new().unwrap();
    write_availability_report(dir.path(), "Availability_Report.xlsx", vec![]);

    let err = Report::build(&config_for(dir.path())).unwrap_err();
    match err {
        PipelineError::FileNotFound { pattern, .. } => assert_eq!(pattern, "Alarm_Report"),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn missing_downloads_dir_is_configuration_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let gone = dir.path().join("not-there");
    let err = Report::build(&config_for(&gone)).unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));
}

#[test]
fn empty_exports_give_fallback_bounds() {
    let dir = tempfile::TempDir::new().unwrap();
    write_alarm_log(dir.path(), "Alarm_Report.xlsx", vec![]);
    write_availability_report(dir.path(), "Availability_Report.xlsx", vec![]);

    let report = Report::build(&config_for(dir.path())).unwrap();
    assert!(report.get_summary().is_empty());
    let bounds = report.date_bounds();
    assert_eq!(bounds.min_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(bounds.max_date, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
}
