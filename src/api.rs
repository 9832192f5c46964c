use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::services::v1::auth::request_loader::APPID_HEADER;
use crate::{controllers, errors, requests, responses};

/// Trust header scheme; the platform sets the app id, the caller sets the
/// user header alongside it.
pub struct AppEngine;

impl Modify for AppEngine {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "appengine",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                APPID_HEADER,
                "Inbound application id, paired with a JSON X-ggrc-user header",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "Custom Attribute"),
        (name = "Health"),
    ),
    modifiers(&AppEngine),
    paths(
        controllers::v1::auth::authenticated,

        controllers::v1::custom_attribute::export,
        controllers::v1::custom_attribute::import,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::custom_attribute::ImportRequest,

        responses::v1::person::Person,
        responses::v1::custom_attribute::ExportRow,
        responses::v1::custom_attribute::ExportColumn,

        errors::ErrorResponse,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
        controllers::health::CacheHealth,
        crate::cache::CacheStats,
    )),
)]
pub struct Definition;
