use actix_web::middleware::Condition;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use lighter_compliance::cache::LocalCache;
use lighter_compliance::metrics::{AppMetrics, MetricsMiddleware};
use lighter_compliance::{config, database, router, telemetry};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    telemetry::init(&config.observability);

    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Starting service"
    );

    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.auto_migrate {
        database::migrate(&db)
            .await
            .context("Failed to run migrations")?;
    }

    if config.auth.appengine.allowed_app_ids.is_empty() {
        ::tracing::warn!("No inbound app ids are allowed, trust header login is disabled");
    }

    let metrics = AppMetrics::with_config(Some(&config));
    let metrics_enabled = config.metrics.enabled;
    let db = Data::new(db);
    let appengine = Data::new(config.auth.appengine.clone());
    let cache = Data::new(LocalCache::from_config(&config.cache));

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(
                metrics_enabled,
                MetricsMiddleware::new(metrics.clone()),
            ))
            .app_data(db.clone())
            .app_data(appengine.clone())
            .app_data(cache.clone())
            .configure(router::route)
    })
    .shutdown_timeout(config.app.shutdown_timeout);

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    ::tracing::info!(host = %config.server.host, port = config.server.port, "Listening");

    server
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?
        .run()
        .await?;

    Ok(())
}
