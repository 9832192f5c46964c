//! Integration tests for `/health`, `/health/db` and `/metrics`

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body, read_body_json, TestRequest};
use serde_json::Value;

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::get().uri("/health").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn test_health_db_reports_connected_database() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["cache"]["enabled"], true);
    assert_eq!(body["cache"]["stats"]["size"], 0);
}

#[actix_web::test]
async fn test_health_db_reports_cache_statistics() {
    let (service, db) = lighter_compliance::service!();
    lighter_compliance::testing::setup::create_person(&db, "user@example.com")
        .await
        .unwrap();

    for _ in 0..2 {
        let req = super::trusted(TestRequest::get().uri("/v1/auth/user"), "user@example.com")
            .to_request();
        assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
    }

    let req = TestRequest::get().uri("/health/db").to_request();
    let body: Value = read_body_json(call_service(&service, req).await).await;

    assert_eq!(body["cache"]["stats"]["hits"], 1);
    assert_eq!(body["cache"]["stats"]["misses"], 1);
    assert_eq!(body["cache"]["stats"]["size"], 1);
}

#[actix_web::test]
async fn test_health_db_reports_closed_database() {
    let (service, db) = lighter_compliance::service!();

    db.clone().close().await.unwrap();

    let req = TestRequest::get().uri("/health/db").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["database"], "disconnected");
}

#[actix_web::test]
async fn test_metrics_endpoint_records_requests() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::get().uri("/health").to_request();
    call_service(&service, req).await;

    let req = TestRequest::get().uri("/metrics").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("http_requests_total"));
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert!(body["paths"]["/v1/auth/user"].is_object());
    assert!(body["components"]["securitySchemes"]["appengine"].is_object());
}
