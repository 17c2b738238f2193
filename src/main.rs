use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tax_calculator::{
  adapters::http::{
    RequestIdMiddleware, configure_bill_routes, configure_tax_object_routes, health_check,
  },
  application::bill::{GetBillUseCase, LoadBillsUseCase},
  application::tax_object::CreateTaxObjectUseCase,
  domain::bill::TaxAggregator,
  domain::tax_object::TaxObjectRepository,
  infrastructure::{config::Config, persistence::postgres::PostgresTaxObjectRepository},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tax_calculator=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting tax calculator");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Failed to load configuration: {}", e),
    )
  })?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  let tax_object_repo: Arc<dyn TaxObjectRepository> = Arc::new(PostgresTaxObjectRepository::new(
    db_pool,
    Duration::from_millis(config.database.query_timeout_ms),
  ));
  let bill_aggregator = Arc::new(TaxAggregator::new());

  // Schema problems are not fatal: the server still starts, but the stored
  // tax objects are only replayed once the schema is known to be in place.
  tracing::info!("Running database migrations");
  match tax_object_repo.migrate().await {
    Ok(()) => {
      tracing::info!("Database migrations completed");

      let load_bills_use_case =
        LoadBillsUseCase::new(tax_object_repo.clone(), bill_aggregator.clone());
      match load_bills_use_case.execute().await {
        Ok(count) => tracing::info!("Replayed {} stored tax objects into the bill", count),
        Err(e) => tracing::error!("Failed to load stored tax objects: {}", e),
      }
    }
    Err(e) => tracing::error!("Failed to migrate the database: {}", e),
  }

  // Initialize use cases
  let create_tax_object_use_case = Arc::new(CreateTaxObjectUseCase::new(
    tax_object_repo.clone(),
    bill_aggregator.clone(),
  ));
  let get_bill_use_case = Arc::new(GetBillUseCase::new(bill_aggregator.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Stops on SIGINT/SIGTERM and gives in-flight requests the configured window
  let result = HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_tax_object_routes(cfg, create_tax_object_use_case.clone()))
      .configure(|cfg| configure_bill_routes(cfg, get_bill_use_case.clone()))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .shutdown_timeout(config.server.shutdown_timeout_seconds)
  .bind((server_host.as_str(), server_port))?
  .run()
  .await;

  tracing::info!("Shutting down");
  tax_object_repo.close().await;

  result
}
