use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use passvault_web::config::{AppConfig, CONFIG_ENV};
use passvault_web::middleware::RequestTracing;
use passvault_web::{build_state, logging, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    let config_path =
        AppConfig::resolve_path(std::env::args().skip(1), std::env::var(CONFIG_ENV).ok());
    let mut config = AppConfig::load(&config_path)?;
    config.apply_env_overrides()?;

    let _log_guard = logging::init_logging(&config.log)?;
    tracing::info!("Using config {}", config_path.display());

    let state = build_state(&config.storage).context("failed to build application state")?;
    state.run_startup().await;
    let state = web::Data::new(state);

    let host = config.server.host.clone();
    let port = config.server.port;
    let workers = config.workers();
    tracing::info!(
        "Server running at http://{host}:{port}/ (store: {}, workers: {workers})",
        config.storage.path.display()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestTracing)
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .workers(workers)
    .bind((host.as_str(), port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await
    .context("server terminated with an error")
}
