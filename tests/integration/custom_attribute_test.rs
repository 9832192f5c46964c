//! Custom attribute export and import through the HTTP API

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use lighter_compliance::entities::v1::custom_attribute_definitions::AttributeType;
use lighter_compliance::testing::setup;
use serde_json::{json, Value};

use super::trusted;

const EMAIL: &str = "user@example.com";
const URI: &str = "/v1/custom_attributes/control/1";

fn column<'a>(body: &'a Value, title: &str) -> &'a Value {
    body["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|column| column["title"] == title)
        .unwrap_or_else(|| panic!("column {} should be exported", title))
}

#[actix_web::test]
async fn test_export_renders_checkbox_values() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();
    let reviewed =
        setup::create_definition(&db, "control", "Reviewed", AttributeType::Checkbox, None)
            .await
            .unwrap();
    let approved =
        setup::create_definition(&db, "control", "Approved", AttributeType::Checkbox, None)
            .await
            .unwrap();
    setup::create_definition(&db, "control", "Signed", AttributeType::Checkbox, None)
        .await
        .unwrap();
    setup::create_value(&db, &reviewed, 1, Some("1"), None).await.unwrap();
    setup::create_value(&db, &approved, 1, Some("0"), None).await.unwrap();

    let req = trusted(TestRequest::get().uri(URI), EMAIL).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["definitionType"], "control");
    assert_eq!(body["objectId"], 1);
    assert_eq!(column(&body, "Reviewed")["value"], "TRUE");
    assert_eq!(column(&body, "Approved")["value"], "FALSE");
    assert_eq!(column(&body, "Signed")["value"], "");
    assert_eq!(column(&body, "Signed")["attributeType"], "Checkbox");
}

#[actix_web::test]
async fn test_export_requires_trust_headers() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::get().uri(URI).to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_import_then_export() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();
    setup::create_person(&db, "owner@example.com").await.unwrap();
    setup::create_definition(&db, "control", "Reviewed", AttributeType::Checkbox, None)
        .await
        .unwrap();
    setup::create_definition(&db, "control", "Owner", AttributeType::MapPerson, None)
        .await
        .unwrap();
    setup::create_definition(&db, "control", "Notes", AttributeType::RichText, None)
        .await
        .unwrap();

    let req = trusted(TestRequest::post().uri(URI), EMAIL)
        .set_json(json!({
            "values": {
                "Reviewed": "Yes",
                "Owner": "owner@example.com",
                "Notes": "<p>checked</p>"
            }
        }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(column(&body, "Reviewed")["value"], "TRUE");
    assert_eq!(column(&body, "Owner")["value"], "owner@example.com");
    assert_eq!(column(&body, "Notes")["value"], "<p>checked</p>");

    let req = trusted(TestRequest::get().uri(URI), EMAIL).to_request();
    let exported: Value = read_body_json(call_service(&service, req).await).await;

    assert_eq!(exported, body);
}

#[actix_web::test]
async fn test_import_reports_invalid_columns() {
    let (service, db) = lighter_compliance::service!();
    setup::create_person(&db, EMAIL).await.unwrap();
    setup::create_definition(&db, "control", "Reviewed", AttributeType::Checkbox, None)
        .await
        .unwrap();
    setup::create_definition(&db, "control", "Due", AttributeType::Date, None)
        .await
        .unwrap();

    let req = trusted(TestRequest::post().uri(URI), EMAIL)
        .set_json(json!({
            "values": {
                "Reviewed": "sometimes",
                "Due": "tomorrow",
                "Missing": "x"
            }
        }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = read_body_json(resp).await;
    assert!(body["errors"]["Reviewed"].is_array());
    assert!(body["errors"]["Due"].is_array());
    assert!(body["errors"]["Missing"].is_array());

    let req = trusted(TestRequest::get().uri(URI), EMAIL).to_request();
    let exported: Value = read_body_json(call_service(&service, req).await).await;

    assert_eq!(column(&exported, "Reviewed")["value"], "");
}

#[actix_web::test]
async fn test_import_requires_trust_headers() {
    let (service, _db) = lighter_compliance::service!();

    let req = TestRequest::post()
        .uri(URI)
        .set_json(json!({ "values": {} }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
