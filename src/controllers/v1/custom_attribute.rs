use actix_web::web::{Data, Json, Path};
use actix_web::Responder;
use sea_orm::DatabaseConnection;

use crate::cache::LocalCache;
use crate::errors::{Error, ErrorResponse};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::AppEngineUser;
use crate::requests::v1::custom_attribute::ImportRequest;
use crate::responses::v1::custom_attribute::ExportRow;
use crate::services;

/// Export the custom attribute columns of one object
#[utoipa::path(
    tag = "Custom Attribute",
    security(("appengine" = [])),
    params(
        ("definition_type" = String, Path, description = "Object kind, e.g. control"),
        ("object_id" = i32, Path, description = "Object id"),
    ),
    responses(
        ExportRow,
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/v1/custom_attributes/{definition_type}/{object_id}")]
pub async fn export(
    user: AppEngineUser,
    db: Data<DatabaseConnection>,
    cache: Data<LocalCache>,
    metrics: Data<AppMetrics>,
    path: Path<(String, i32)>,
) -> Result<impl Responder, Error> {
    user.require()?;

    let (definition_type, object_id) = path.into_inner();
    let response =
        services::v1::custom_attribute::export::export(db.get_ref(), &cache, &definition_type, object_id)
            .await?;

    metrics.record_export(&definition_type);

    Ok(response)
}

/// Import one row of custom attribute cells into an object
///
/// Fail if:
/// - a column has no definition
/// - a cell does not parse for its attribute type
/// - a person column names an unknown email
#[utoipa::path(
    tag = "Custom Attribute",
    security(("appengine" = [])),
    params(
        ("definition_type" = String, Path, description = "Object kind, e.g. control"),
        ("object_id" = i32, Path, description = "Object id"),
    ),
    request_body = ImportRequest,
    responses(
        ExportRow,
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Invalid cells", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/v1/custom_attributes/{definition_type}/{object_id}")]
pub async fn import(
    user: AppEngineUser,
    db: Data<DatabaseConnection>,
    cache: Data<LocalCache>,
    metrics: Data<AppMetrics>,
    path: Path<(String, i32)>,
    Json(request): Json<ImportRequest>,
) -> Result<impl Responder, Error> {
    let person = user.require()?;
    let (definition_type, object_id) = path.into_inner();

    ::tracing::info!(person_id = person.id, %definition_type, object_id, "Importing row");

    let result =
        services::v1::custom_attribute::import::import(&db, &cache, &definition_type, object_id, request)
            .await;

    metrics.record_import(&definition_type, result.is_ok());

    Ok(result?)
}
