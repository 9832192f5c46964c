/// Builds the full application over a fresh in-memory database.
///
/// Evaluates to `(service, db)`; the trust header allow-list is
/// [`crate::testing::setup::ALLOWED_APP_ID`].
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let app = ::actix_web::App::new()
            .wrap($crate::metrics::MetricsMiddleware::new(
                $crate::metrics::AppMetrics::new(),
            ))
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::appengine_config(),
            ))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::cache(),
            ))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
