//! Benchmarks for the consumer filter pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic listing a little larger than a busy sandbox returns.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use consumer_model::{ConsumerRecord, DEFAULT_DATETIME_FORMAT, scrub};
use pipeline::filters::{AppTypeFilter, EnabledFilter, TimeRangeFilter};
use pipeline::{FilterPipeline, QueryParams};

fn synthetic_records(count: usize) -> Vec<ConsumerRecord> {
    (0..count)
        .map(|i| ConsumerRecord {
            consumer_id: i.to_string(),
            app_name: format!("App {}", i % 500),
            app_type: if i % 3 == 0 { "Mobile" } else { "Web" }.to_string(),
            description: String::new(),
            developer_email: format!("dev{}@example.com", i % 700),
            redirect_url: String::new(),
            created_by_user_id: String::new(),
            enabled: i % 4 != 0,
            created: format!("20{:02}-0{}-1{}T10:00:00Z", 15 + i % 10, 1 + i % 9, i % 10),
        })
        .collect()
}

fn consumer_pipeline() -> FilterPipeline<ConsumerRecord> {
    FilterPipeline::new()
        .add_filter(EnabledFilter)
        .add_filter(AppTypeFilter)
        .add_filter(TimeRangeFilter::new("created", DEFAULT_DATETIME_FORMAT))
}

fn bench_apply_filters(c: &mut Criterion) {
    let records = synthetic_records(5_000);
    let pipeline = consumer_pipeline();
    let params = QueryParams::parse("enabled=true&app_type=Web&time=year");

    c.bench_function("pipeline_apply_all_active", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(records.clone()), black_box(&params));
            black_box(filtered)
        })
    });
}

fn bench_scrub(c: &mut Criterion) {
    let records = synthetic_records(5_000);

    c.bench_function("scrub_consumers", |b| {
        b.iter(|| {
            let consumers = scrub(black_box(records.clone()), DEFAULT_DATETIME_FORMAT).unwrap();
            black_box(consumers)
        })
    });
}

criterion_group!(benches, bench_apply_filters, bench_scrub);
criterion_main!(benches);
