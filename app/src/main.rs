// app/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use storefront_app::config::AppConfig;
use storefront_app::state::AppState;
use storefront_app::web::configure_app_routes;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    anyhow::anyhow!("configuration error: {}", e)
  })?;

  let app_state = AppState::load(app_config).map_err(|e| {
    tracing::error!(error = %e, "Failed to load the product catalog.");
    anyhow::anyhow!("catalog error: {}", e)
  })?;
  tracing::info!(
    store = %app_state.config.store_name,
    products = app_state.catalog.len(),
    "Catalog ready."
  );

  let server_address = format!("{}:{}", app_state.config.server_host, app_state.config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
