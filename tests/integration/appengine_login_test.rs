//! Trust header login through `GET /v1/auth/user`

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use lighter_compliance::testing::setup;
use serde_json::Value;

use super::{trusted, APPID_HEADER, USER_HEADER};

const EMAIL: &str = "user@example.com";

#[actix_web::test]
async fn test_valid_trust_headers_return_person() {
    let (service, db) = lighter_compliance::service!();
    let person = setup::create_person(&db, EMAIL).await.unwrap();

    let req = trusted(TestRequest::get().uri("/v1/auth/user"), EMAIL).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["id"], person.id);
    assert_eq!(body["email"], EMAIL);
    assert_eq!(body["name"], "user");
}

#[actix_web::test]
async fn test_missing_trust_headers_are_unauthorized() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();

    let req = TestRequest::get().uri("/v1/auth/user").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_user_header_alone_is_ignored() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();

    let req = TestRequest::get()
        .uri("/v1/auth/user")
        .insert_header((USER_HEADER, r#"{"email": "user@example.com"}"#))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_rejected_trust_headers_are_bad_requests() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();

    let cases: [(&str, Option<&str>); 7] = [
        ("disallowed", Some(r#"{"email": "user@example.com"}"#)),
        (setup::ALLOWED_APP_ID, None),
        (setup::ALLOWED_APP_ID, Some("not a valid json")),
        (setup::ALLOWED_APP_ID, Some("{}")),
        (setup::ALLOWED_APP_ID, Some("[]")),
        (setup::ALLOWED_APP_ID, Some("12")),
        (setup::ALLOWED_APP_ID, Some(r#"{"email": "nobody@example.com"}"#)),
    ];

    for (app_id, user) in cases {
        let mut req = TestRequest::get()
            .uri("/v1/auth/user")
            .insert_header((APPID_HEADER, app_id));

        if let Some(user) = user {
            req = req.insert_header((USER_HEADER, user));
        }

        let resp = call_service(&service, req.to_request()).await;

        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "app id {:?} with user {:?}",
            app_id,
            user
        );

        let body: Value = read_body_json(resp).await;
        assert!(body["message"].is_string());
    }
}

#[actix_web::test]
async fn test_resolved_person_is_cached() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();

    let req = trusted(TestRequest::get().uri("/v1/auth/user"), EMAIL).to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    db.clone().close().await.unwrap();

    let req = trusted(TestRequest::get().uri("/v1/auth/user"), EMAIL).to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_database_failure_is_server_error() {
    let (service, db) = lighter_compliance::service!();

    db.clone().close().await.unwrap();

    let req = trusted(TestRequest::get().uri("/v1/auth/user"), EMAIL).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");
}
