//! Performance benchmarks for the Work-Time Computation Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single day of punches: < 100μs mean
//! - Full week of punches: < 1ms mean
//! - Full month of punches: < 5ms mean
//! - Batch of 100 weekly requests: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use worktime_engine::api::{AppState, create_router};
use worktime_engine::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/worktime").expect("Failed to load config");
    AppState::new(config)
}

/// Creates an IN/OUT punch pair for a 09:00-18:00 day at UTC+8.
fn create_punch_pair(date: &str, seq: usize) -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "id": format!("evt_{:04}_in", seq),
            "user_id": "user_bench_001",
            "type": "in",
            "timestamp": format!("{date}T09:00:00+08:00")
        }),
        serde_json::json!({
            "id": format!("evt_{:04}_out", seq),
            "user_id": "user_bench_001",
            "type": "out",
            "timestamp": format!("{date}T18:00:00+08:00")
        }),
    ]
}

/// Creates a stats request covering the given weekday dates.
fn create_request_for_dates(dates: &[&str], start: &str, end: &str, time_range: &str) -> String {
    let events: Vec<serde_json::Value> = dates
        .iter()
        .enumerate()
        .flat_map(|(i, date)| create_punch_pair(date, i))
        .collect();

    let request_json = serde_json::json!({
        "period": {
            "start_date": start,
            "end_date": end,
            "time_range": time_range
        },
        "events": events
    });

    serde_json::to_string(&request_json).unwrap()
}

/// January 2026 weekdays, Monday 2026-01-05 through Friday 2026-01-30.
fn january_weekdays() -> Vec<&'static str> {
    vec![
        "2026-01-05",
        "2026-01-06",
        "2026-01-07",
        "2026-01-08",
        "2026-01-09",
        "2026-01-12",
        "2026-01-13",
        "2026-01-14",
        "2026-01-15",
        "2026-01-16",
        "2026-01-19",
        "2026-01-20",
        "2026-01-21",
        "2026-01-22",
        "2026-01-23",
        "2026-01-26",
        "2026-01-27",
        "2026-01-28",
        "2026-01-29",
        "2026-01-30",
    ]
}

/// Benchmark: Single day of punches.
///
/// Target: < 100μs mean
fn bench_single_day(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_for_dates(&["2026-01-15"], "2026-01-12", "2026-01-19", "week");

    c.bench_function("single_day", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/stats")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Full week of punches.
///
/// Target: < 1ms mean
fn bench_full_week(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_for_dates(
        &[
            "2026-01-12",
            "2026-01-13",
            "2026-01-14",
            "2026-01-15",
            "2026-01-16",
        ],
        "2026-01-12",
        "2026-01-19",
        "week",
    );

    c.bench_function("full_week", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/stats")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Full month of punches.
///
/// Target: < 5ms mean
fn bench_full_month(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let dates = january_weekdays();
    let body = create_request_for_dates(&dates, "2026-01-01", "2026-02-01", "month");

    c.bench_function("full_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/stats")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 weekly requests.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary user IDs for realistic scenario)
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let events: Vec<serde_json::Value> = [
                "2026-01-12",
                "2026-01-13",
                "2026-01-14",
                "2026-01-15",
                "2026-01-16",
            ]
            .iter()
            .enumerate()
            .flat_map(|(d, date)| {
                vec![
                    serde_json::json!({
                        "id": format!("evt_{:03}_{}_in", i, d),
                        "user_id": format!("user_batch_{:03}", i),
                        "type": "in",
                        "timestamp": format!("{date}T09:00:00+08:00")
                    }),
                    serde_json::json!({
                        "id": format!("evt_{:03}_{}_out", i, d),
                        "user_id": format!("user_batch_{:03}", i),
                        "type": "out",
                        "timestamp": format!("{date}T18:00:00+08:00")
                    }),
                ]
            })
            .collect();

            let request_json = serde_json::json!({
                "period": {
                    "start_date": "2026-01-12",
                    "end_date": "2026-01-19",
                    "time_range": "week"
                },
                "events": events
            });
            serde_json::to_string(&request_json).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/stats")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various day counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let dates = january_weekdays();

    let mut group = c.benchmark_group("scaling");

    for day_count in [1, 2, 5, 10, 20].iter() {
        let router = create_router(state.clone());
        let body =
            create_request_for_dates(&dates[..*day_count], "2026-01-01", "2026-02-01", "month");

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), day_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/stats")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_day,
    bench_full_week,
    bench_full_month,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
