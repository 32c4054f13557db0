//! End-to-end tests for the Task Manager API over the in-memory store.
//!
//! The router is wrapped in the production HTTP layers and driven with
//! `tower::ServiceExt::oneshot`, so status codes, headers and bodies are
//! exactly what a client would observe.

mod test_helpers;

use axum::Router;
use axum::http::{StatusCode, header};
use eyre::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::{body_json, in_memory_database, request, send};
use workboard::server::with_http_layers;
use workboard::task_manager::{bootstrap, http::router};

#[fixture]
async fn app() -> Result<Router> {
    let service = bootstrap(&in_memory_database("TasksDb")).await?;
    Ok(with_http_layers(router(service)))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_task_can_be_read_then_deleted(#[future] app: Result<Router>) -> Result<()> {
    let app = app.await?;

    let fetched = send(&app, request("GET", "/Tasks/2", None)?).await?;
    ensure!(fetched.status() == StatusCode::OK, "unexpected {}", fetched.status());
    let body = body_json(fetched).await?;
    assert_eq!(body["summary"], json!("Implement Front End Service"));

    let deleted = send(&app, request("DELETE", "/Tasks/2", None)?).await?;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = send(&app, request("GET", "/Tasks/2", None)?).await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_appends_exactly_one_row(#[future] app: Result<Router>) -> Result<()> {
    let app = app.await?;
    let before = body_json(send(&app, request("GET", "/Tasks", None)?).await?).await?;

    let payload = json!({
        "summary": "Write release notes",
        "description": "Summarise the sprint",
        "startDate": "2018-07-23",
        "priority": "Urgent",
        "status": "InProgress"
    });
    let created = send(&app, request("POST", "/Tasks", Some(&payload))?).await?;
    assert_eq!(created.status(), StatusCode::CREATED);
    let location = created
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let created_body = body_json(created).await?;

    let after = body_json(send(&app, request("GET", "/Tasks", None)?).await?).await?;
    let before_len = before.as_array().map_or(0, Vec::len);
    let after_len = after.as_array().map_or(0, Vec::len);
    assert_eq!(after_len, before_len + 1);
    assert_eq!(
        location,
        Some(format!("/Tasks/{}", created_body["taskId"]))
    );
    assert_eq!(created_body["priority"], json!("Urgent"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_summary_returns_error_envelope(#[future] app: Result<Router>) -> Result<()> {
    let app = app.await?;
    let payload = json!({ "summary": "x".repeat(256) });

    let response = send(&app, request("POST", "/Tasks", Some(&payload))?).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await?;
    assert_eq!(body["code"], json!(500));
    assert_eq!(
        body["message"],
        json!("Unable to create model. Please see error details for more information")
    );
    assert_eq!(
        body["errors"]["summary"],
        json!(["summary cannot be longer than 255 characters."])
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_value_is_rejected(#[future] app: Result<Router>) -> Result<()> {
    let app = app.await?;
    let payload = json!({ "summary": "Pause", "status": "Suspended" });

    let response = send(&app, request("PUT", "/Tasks/1", Some(&payload))?).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await?;
    assert!(body["errors"]["body"].is_array());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cors_preflight_is_permissive(#[future] app: Result<Router>) -> Result<()> {
    let app = app.await?;
    let preflight = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/Tasks")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(axum::body::Body::empty())?;

    let response = send(&app, preflight).await?;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    Ok(())
}
