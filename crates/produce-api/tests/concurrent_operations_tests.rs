//! Concurrent request tests against the HTTP router.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tokio::task::JoinSet;
use tower::ServiceExt;

use produce_api::http::{create_router, AppState};
use produce_storage::{MemoryProduceStore, ProduceStore};

fn post(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/produce")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Test: Concurrent requests adding the same code
///
/// Exactly one request gets 200; the rest see a conflict (206 with no
/// accepted records).
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_same_code() {
    let storage = Arc::new(MemoryProduceStore::new());
    let app = create_router(AppState::new(Arc::clone(&storage)));

    let mut join_set = JoinSet::new();
    for i in 0..20 {
        let app = app.clone();
        join_set.spawn(async move {
            let body = format!(
                r#"{{"Produce Code": "CCCC-1111-2222-3333", "Name": "Plum {i}", "Unit Price": "0.99"}}"#
            );
            app.oneshot(post(body)).await.unwrap().status()
        });
    }

    let mut statuses = Vec::new();
    while let Some(result) = join_set.join_next().await {
        statuses.push(result.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::PARTIAL_CONTENT)
            .count(),
        19
    );
    assert_eq!(storage.len().await, 1);
}

/// Test: Concurrent batches with disjoint codes all land
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_batches_disjoint_codes() {
    let storage = Arc::new(MemoryProduceStore::new());
    let app = create_router(AppState::new(Arc::clone(&storage)));

    let mut join_set = JoinSet::new();
    for batch in 0..8 {
        let app = app.clone();
        join_set.spawn(async move {
            let records: Vec<String> = (0..10)
                .map(|i| {
                    format!(
                        r#"{{"Produce Code": "DDDD-{batch:04}-EEEE-{i:04}", "Name": "Fig", "Unit Price": "$2."}}"#
                    )
                })
                .collect();
            let body = format!("[{}]", records.join(","));
            app.oneshot(post(body)).await.unwrap().status()
        });
    }

    while let Some(result) = join_set.join_next().await {
        assert_eq!(result.unwrap(), StatusCode::OK);
    }

    assert_eq!(storage.len().await, 80);
    let fetched = storage.get_by_key("dddd-0003-eeee-0007").await;
    assert_eq!(fetched.produce.unit_price, "2.00");
}
