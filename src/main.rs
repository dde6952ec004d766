use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod report;
mod routes;
mod store;

use config::Config;
use db::init_db;

use crate::report::ReportService;
use crate::store::AttendanceStore;
use crate::store::mysql::MySqlStore;
use crate::store::retry::RetryingStore;
use tracing::info;
use tracing_appender::rolling;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config.database_url).await?;

    let store: Arc<dyn AttendanceStore> = Arc::new(RetryingStore::new(
        Arc::new(MySqlStore::new(pool)),
        config.store_retry_attempts,
        config.store_retry_delay,
    ));
    let service = Data::new(ReportService::new(store, config.report_concurrency));

    let limiter = routes::api_rate_limiter(config.rate_api_per_min)
        .context("RATE_API_PER_MIN does not give a usable rate limit")?;

    let server_addr = config.server_addr.clone();
    let api_doc = docs::openapi(&config.api_prefix);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", api_doc.clone()),
            )
            .app_data(service.clone())
            .configure(|cfg| routes::configure(cfg, &config, &limiter))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
