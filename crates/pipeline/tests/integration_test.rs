//! Integration tests for the pipeline.
//!
//! These tests verify that the filters, the pipeline and scrubbing work
//! together the way the consumer listing uses them.

use chrono::{NaiveDate, NaiveDateTime};
use consumer_model::{ConsumerRecord, DEFAULT_DATETIME_FORMAT, scrub};
use pipeline::filters::*;
use pipeline::{FilterPipeline, QueryParams};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn record(id: &str, app_type: &str, enabled: bool, created: &str) -> ConsumerRecord {
    ConsumerRecord {
        consumer_id: id.to_string(),
        app_name: format!("App {}", id),
        app_type: app_type.to_string(),
        description: format!("Consumer number {}", id),
        developer_email: format!("dev{}@example.com", id),
        redirect_url: format!("https://app{}.example.com/callback", id),
        created_by_user_id: "user-1".to_string(),
        enabled,
        created: created.to_string(),
    }
}

fn create_test_records() -> Vec<ConsumerRecord> {
    vec![
        record("1", "Web", true, "2024-03-10T08:00:00Z"),
        record("2", "Mobile", true, "2024-03-09T12:00:00Z"),
        record("3", "Web", false, "2024-03-08T12:00:00Z"),
        record("4", "Web", true, "2023-11-01T00:00:00Z"),
        record("5", "Mobile", false, "2024-03-10T09:00:00Z"),
    ]
}

fn consumer_pipeline() -> FilterPipeline<ConsumerRecord> {
    FilterPipeline::new()
        .add_filter(EnabledFilter)
        .add_filter(AppTypeFilter)
        .add_filter(TimeRangeFilter::new("created", DEFAULT_DATETIME_FORMAT).with_now(now()))
}

#[test]
fn test_no_params_is_identity() {
    let records = create_test_records();

    let filtered = consumer_pipeline().apply(records.clone(), &QueryParams::new());

    assert_eq!(filtered.records, records, "Order and contents must be unchanged");
    assert_eq!(filtered.active.len(), 3);
    assert!(filtered.active.iter().all(|f| !f.is_active()));
}

#[test]
fn test_no_params_then_scrub_converts_only_created() {
    let records = create_test_records();

    let filtered = consumer_pipeline().apply(records.clone(), &QueryParams::new());
    let consumers = scrub(filtered.records, DEFAULT_DATETIME_FORMAT).unwrap();

    assert_eq!(consumers.len(), records.len());
    for (raw, consumer) in records.iter().zip(&consumers) {
        assert_eq!(raw.consumer_id, consumer.consumer_id);
        assert_eq!(raw.app_name, consumer.app_name);
        assert_eq!(raw.app_type, consumer.app_type);
        assert_eq!(raw.description, consumer.description);
        assert_eq!(raw.developer_email, consumer.developer_email);
        assert_eq!(raw.redirect_url, consumer.redirect_url);
        assert_eq!(raw.enabled, consumer.enabled);
        assert_eq!(
            consumer.created.format(DEFAULT_DATETIME_FORMAT).to_string(),
            raw.created
        );
    }
}

#[test]
fn test_all_filters_active() {
    let params = QueryParams::parse("enabled=true&app_type=Web&time=week");

    let filtered = consumer_pipeline().apply(create_test_records(), &params);

    // 1: enabled Web from this morning
    // 2: Mobile, 3: disabled, 4: too old, 5: disabled Mobile
    assert_eq!(filtered.records.len(), 1);
    assert_eq!(filtered.records[0].consumer_id, "1");
    assert_eq!(filtered.active.value("enabled"), Some("true"));
    assert_eq!(filtered.active.value("app_type"), Some("Web"));
    assert_eq!(filtered.active.value("time"), Some("week"));
}

#[test]
fn test_disabled_consumers_in_last_day() {
    let params = QueryParams::parse("enabled=false&time=day");

    let filtered = consumer_pipeline().apply(create_test_records(), &params);

    let ids: Vec<_> = filtered.records.iter().map(|r| r.consumer_id.as_str()).collect();
    assert_eq!(ids, vec!["5"]);
    assert!(!filtered.active.is_active("app_type"));
}

#[test]
fn test_filters_work_on_scrubbed_consumers() {
    let consumers = scrub(create_test_records(), DEFAULT_DATETIME_FORMAT).unwrap();
    let pipeline = FilterPipeline::new()
        .add_filter(AppTypeFilter)
        .add_filter(TimeRangeFilter::new("created", DEFAULT_DATETIME_FORMAT).with_now(now()));

    let filtered = pipeline.apply(consumers, &QueryParams::parse("app_type=Mobile&time=month"));

    let ids: Vec<_> = filtered.records.iter().map(|c| c.consumer_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);
}
