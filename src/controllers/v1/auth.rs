use actix_web::Responder;

use crate::errors::{Error, ErrorResponse};
use crate::middlewares::v1::auth::AppEngineUser;
use crate::responses::v1::person::Person;
use crate::services;

/// Get the person a trusted application acts for
///
/// Fail if:
/// - app id is not allowed
/// - user header is missing, malformed or names an unknown person
/// - no trust headers were sent
#[utoipa::path(
    tag = "Auth",
    security(("appengine" = [])),
    responses(
        Person,
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/v1/auth/user")]
pub async fn authenticated(user: AppEngineUser) -> Result<impl Responder, Error> {
    let response = services::v1::auth::authenticated::authenticated(user).await?;
    Ok(response)
}
