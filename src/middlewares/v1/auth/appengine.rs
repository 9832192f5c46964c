use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use sea_orm::DatabaseConnection;

use crate::cache::LocalCache;
use crate::config::AppEngineConfig;
use crate::entities::v1::people;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::services::v1::auth::request_loader::request_loader;

/// Person a trusted app-to-app request acts for, `None` when the request
/// carries no trust headers at all.
#[derive(Clone, Debug)]
pub struct AppEngineUser(pub Option<people::Model>);

impl AppEngineUser {
    /// Fails with 401 when the request was not authenticated
    pub fn require(self) -> Result<people::Model, Error> {
        self.0
            .ok_or_else(|| Error::unauthorized("Authentication required"))
    }
}

fn app_data<T: 'static>(req: &HttpRequest) -> Result<Data<T>, Error> {
    req.app_data::<Data<T>>().cloned().ok_or_else(|| {
        ::tracing::error!(
            data = std::any::type_name::<T>(),
            "Application data is not registered"
        );

        Error::internal("Authentication is not configured")
    })
}

impl FromRequest for AppEngineUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = Instant::now();
        let headers = req.headers().clone();
        let metrics = req.app_data::<Data<AppMetrics>>().cloned();
        let data = app_data::<DatabaseConnection>(req).and_then(|db| {
            Ok((
                db,
                app_data::<AppEngineConfig>(req)?,
                app_data::<LocalCache>(req)?,
            ))
        });

        Box::pin(async move {
            let (db, config, cache) = data?;
            let result = request_loader(&db, &config, &cache, &headers).await;

            let outcome = match &result {
                Ok(Some(_)) => "authenticated",
                Ok(None) => "anonymous",
                Err(_) => "rejected",
            };

            if let Some(metrics) = metrics {
                metrics.record_appengine_auth(outcome);
            }

            ::tracing::debug!(outcome, elapsed = ?start.elapsed(), "Trust headers processed");

            result.map(Self)
        })
    }
}
