use actix_web::web::{self, Data, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::metrics::AppMetrics;

/// Registers every endpoint. Expects `Data` for the database connection,
/// `AppEngineConfig` and `LocalCache` to be provided by the caller.
pub fn route(app: &mut ServiceConfig) {
    app.app_data(Data::new(AppMetrics::new()));
    // Auth
    app.service(controllers::v1::auth::authenticated);
    // Custom attributes
    app.service(controllers::v1::custom_attribute::export);
    app.service(controllers::v1::custom_attribute::import);

    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    app.service(controllers::metrics::metrics);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Compliance", "/api.json"),
        Definition::openapi(),
    )]));
}
