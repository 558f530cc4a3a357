use std::fs;

use tempfile::TempDir;

use super::*;
use crate::data::Lang;

#[test]
fn builtin_snapshot_parses() {
    let snapshot = MetricSnapshot::builtin().unwrap();
    assert_eq!(snapshot.channel.name, "Sherzod Shermatov");
    assert_eq!(snapshot.kpi.subscribers.total, 8375);
    assert_eq!(snapshot.citation_trend.labels.len(), 30);
    assert_eq!(snapshot.mentions_by_topic.len(), 6);
    assert_eq!(snapshot.mentions_by_country.len(), 5);
    assert_eq!(snapshot.mentions_by_type.len(), 5);
    assert_eq!(snapshot.views_trend.views.len(), 11);
    assert_eq!(snapshot.subscriber_growth.len(), 6);
    assert_eq!(snapshot.top_posts.len(), 5);
}

#[test]
fn builtin_labels_resolve_in_both_languages() {
    let snapshot = MetricSnapshot::builtin().unwrap();
    let topic = &snapshot.mentions_by_topic[0].topic;
    assert_eq!(topic.resolve(Lang::Ru), "Новости и СМИ");
    assert_eq!(topic.resolve(Lang::En), "News & Media");
    assert_eq!(
        snapshot.channel.report_period.resolve(Lang::En),
        "December 2025 — January 2026"
    );
}

#[test]
fn mention_type_field_is_named_type() {
    let snapshot = MetricSnapshot::builtin().unwrap();
    assert_eq!(
        snapshot.mentions_by_type[1].kind.resolve(Lang::En),
        "2-5 channels"
    );
}

#[test]
fn mismatched_series_is_rejected() {
    let mut snapshot = MetricSnapshot::builtin().unwrap();
    snapshot.views_trend.views.pop();

    let err = snapshot.validate().unwrap_err();
    assert!(err.to_string().contains("views_trend.views"));
    assert!(err.to_string().contains("10 values for 11 labels"));
}

#[test]
fn series_collections_default_to_empty() {
    let source = MetricSnapshot::builtin_source();
    let header_end = source.find("[citation_trend]").unwrap();
    let snapshot = MetricSnapshot::from_toml(&source[..header_end]).unwrap();

    assert!(snapshot.citation_trend.labels.is_empty());
    assert!(snapshot.mentions_by_topic.is_empty());
    assert!(snapshot.top_posts.is_empty());
}

#[test]
fn load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.toml");
    fs::write(&path, MetricSnapshot::builtin_source()).unwrap();

    let snapshot = MetricSnapshot::load(&path).unwrap();
    assert_eq!(snapshot, MetricSnapshot::builtin().unwrap());
}

#[test]
fn load_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = MetricSnapshot::load(&path).unwrap_err();
    assert!(matches!(err, DashboardError::FileRead { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = MetricSnapshot::from_toml("[channel\nname = 1").unwrap_err();
    assert!(matches!(err, DashboardError::TomlParse(_)));
}
