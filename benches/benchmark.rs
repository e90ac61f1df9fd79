use criterion::{black_box, criterion_group, criterion_main, Criterion};
use link_inspector::{
    format_outcome, matches, ClassificationOutcome, Classifier, FilterSpec, JsonStyle, OutputFormat, OutputSettings,
    ProbeResult,
};
use std::time::Duration;

// Fast settings for all benchmarks
fn configure_fast_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_millis(500));
    group.sample_size(20);
}

fn sample_result() -> ProbeResult {
    ProbeResult {
        status_code: 200,
        content_length: 1234,
        content_type: "text/html".to_string(),
    }
}

fn benchmark_suffix_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_lookup");
    configure_fast_group(&mut group);

    let classifier = Classifier::default();
    let urls = [
        ("early_hit", "https://example.com/backup.zip"),
        ("late_hit", "https://example.com/main.rs"),
        ("miss", "https://example.com/api/v1/users"),
    ];

    for (name, url) in urls {
        group.bench_function(name, |b| {
            b.iter(|| black_box(classifier.classify_by_suffix(black_box(url))));
        });
    }

    group.finish();
}

fn benchmark_content_type_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_type_lookup");
    configure_fast_group(&mut group);

    let classifier = Classifier::default();
    for content_type in ["text/html", "application/zip", "application/x-unknown"] {
        group.bench_function(content_type, |b| {
            b.iter(|| black_box(classifier.classify_by_content_type(black_box(content_type))));
        });
    }

    group.finish();
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");
    configure_fast_group(&mut group);

    group.bench_function("matches", |b| {
        b.iter(|| black_box(matches(black_box("302"), black_box("200, 301, 302, 404"))));
    });

    let filters = FilterSpec::parse("200,302", "", "text/html,application/json", "html");
    let result = sample_result();
    group.bench_function("accepts", |b| {
        b.iter(|| black_box(filters.accepts(black_box(&result), black_box("html"))));
    });

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    configure_fast_group(&mut group);

    let outcome = ClassificationOutcome::active("https://example.com/", sample_result(), "html");
    let styles = [
        ("plain", OutputFormat::Plain, JsonStyle::Pretty),
        ("color", OutputFormat::Color, JsonStyle::Pretty),
        ("json_pretty", OutputFormat::Json, JsonStyle::Pretty),
        ("json_compact", OutputFormat::Json, JsonStyle::Compact),
    ];

    for (name, format, json_style) in styles {
        let settings = OutputSettings {
            format,
            json_style,
            verbose: true,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| black_box(format_outcome(black_box(&outcome), &settings)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_suffix_lookup,
    benchmark_content_type_lookup,
    benchmark_filters,
    benchmark_formatting
);
criterion_main!(benches);
