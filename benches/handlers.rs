//! Handler latency benchmarks over the in-memory stores.
//!
//! Each request runs through the full router, including extraction,
//! validation and JSON encoding, against a seeded store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tokio::runtime::Runtime;
use tower::ServiceExt;
use workboard::config::{DatabaseConfig, DatabaseKind};

fn in_memory(name: &str) -> DatabaseConfig {
    DatabaseConfig {
        kind: DatabaseKind::InMemory,
        connection_string: String::new(),
        name: name.to_owned(),
        pool_size: 1,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default()
}

async fn call(app: &Router, request: Request<Body>) {
    if let Ok(response) = app.clone().oneshot(request).await {
        black_box(response.status());
    }
}

fn benchmark_task_manager(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let app = runtime
        .block_on(workboard::task_manager::bootstrap(&in_memory("TasksDb")))
        .map(workboard::task_manager::http::router)
        .expect("bootstrap");

    let mut group = criterion.benchmark_group("task_manager");
    for uri in ["/Tasks", "/Tasks/2", "/Tasks/404"] {
        group.bench_with_input(BenchmarkId::new("get", uri), uri, |bencher, uri| {
            bencher
                .to_async(&runtime)
                .iter(|| call(&app, get(uri)));
        });
    }
    group.bench_function("post", |bencher| {
        bencher.to_async(&runtime).iter(|| {
            let request = Request::builder()
                .method("POST")
                .uri("/Tasks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"summary":"Benchmark task","priority":"Low"}"#))
                .unwrap_or_default();
            call(&app, request)
        });
    });
    group.finish();
}

fn benchmark_project_manager(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("tokio runtime");
    let app = runtime
        .block_on(workboard::project_manager::bootstrap(&in_memory(
            "ProjectManagerDb",
        )))
        .map(workboard::project_manager::http::router)
        .expect("bootstrap");

    let mut group = criterion.benchmark_group("project_manager");
    for uri in [
        "/Projects",
        "/Projects/1/Members",
        "/Users?employeeId=100013",
        "/Users/14/ManagedProject",
    ] {
        group.bench_with_input(BenchmarkId::new("get", uri), uri, |bencher, uri| {
            bencher
                .to_async(&runtime)
                .iter(|| call(&app, get(uri)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_task_manager, benchmark_project_manager);
criterion_main!(benches);
