//! App-to-app login through platform trust headers.
//!
//! The hosting platform sets `X-appengine-inbound-appid` on requests coming
//! from another application and strips it from everything else, so its
//! presence is what makes the caller trusted. The calling application names
//! the acting user in `X-ggrc-user`.

use actix_web::http::header::HeaderMap;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::cache::{Cache, CacheKey, LocalCache};
use crate::config::AppEngineConfig;
use crate::entities::v1::people::Model;
use crate::errors::Error;

pub const APPID_HEADER: &str = "X-appengine-inbound-appid";
pub const USER_HEADER: &str = "X-ggrc-user";

/// Email of the user the trusted caller acts for.
///
/// `Ok(None)` when the request carries no app id, i.e. is not an
/// app-to-app call at all.
pub fn credentials(config: &AppEngineConfig, headers: &HeaderMap) -> Result<Option<String>, Error> {
    let app_id = match headers.get(APPID_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| Error::bad_request(format!("{} header is not valid text", APPID_HEADER)))?,
        None => return Ok(None),
    };

    if app_id.is_empty() {
        return Ok(None);
    }

    if !config.is_allowed(app_id) {
        ::tracing::warn!(app_id = %app_id, "Inbound app id is not allowed");

        return Err(Error::bad_request(format!(
            "{} header contains an unknown app id",
            APPID_HEADER
        )));
    }

    let user = headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::bad_request(format!("{} header is required", USER_HEADER)))?;

    let invalid = || Error::bad_request(format!("{} header contains invalid json", USER_HEADER));

    let user = serde_json::from_str::<Value>(user).map_err(|_| invalid())?;
    let email = match user {
        Value::Object(map) => match map.get("email") {
            Some(Value::String(email)) => email.clone(),
            _ => return Err(invalid()),
        },
        _ => return Err(invalid()),
    };

    Ok(Some(email))
}

/// Resolves the person a trusted app-to-app request acts for.
///
/// Missing app id means no credentials and yields `Ok(None)`; every other
/// malformed, disallowed or unresolvable credential is a bad request.
#[::tracing::instrument(skip_all)]
pub async fn request_loader(
    db: &DatabaseConnection,
    config: &AppEngineConfig,
    cache: &LocalCache,
    headers: &HeaderMap,
) -> Result<Option<Model>, Error> {
    let Some(email) = credentials(config, headers)? else {
        return Ok(None);
    };

    let key = CacheKey::person(&email);

    match cache.get::<Model>(&key).await {
        Ok(Some(person)) => {
            ::tracing::debug!(person_id = person.id, "Person cache hit");

            return Ok(Some(person));
        }
        Ok(None) => ::tracing::debug!("Person cache miss"),
        Err(e) => ::tracing::error!(error = %e, "Failed to read person from cache"),
    }

    let person = match Model::find_by_email(db, &email).await? {
        Some(person) => person,
        None => {
            ::tracing::warn!(email = %email, "Trusted request names an unknown user");

            return Err(Error::bad_request(format!(
                "{} header contains unknown user",
                USER_HEADER
            )));
        }
    };

    if let Err(e) = cache.set(&key, &person, cache.ttl()).await {
        ::tracing::error!(error = %e, "Failed to cache person");
    }

    ::tracing::info!(person_id = person.id, "Authenticated trusted app request");

    Ok(Some(person))
}
