//! Integration tests for lighter-compliance endpoints

pub mod appengine_login_test;
pub mod custom_attribute_test;
pub mod health_test;

use actix_web::test::TestRequest;
use lighter_compliance::testing::setup::ALLOWED_APP_ID;

pub const APPID_HEADER: &str = "X-appengine-inbound-appid";
pub const USER_HEADER: &str = "X-ggrc-user";

/// Request carrying valid trust headers for `email`
pub fn trusted(request: TestRequest, email: &str) -> TestRequest {
    request
        .insert_header((APPID_HEADER, ALLOWED_APP_ID))
        .insert_header((USER_HEADER, serde_json::json!({ "email": email }).to_string()))
}
