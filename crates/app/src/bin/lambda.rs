//! Carepath API - AWS Lambda Runtime

use lambda_http::{run, Error};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use carepath_app::{body_limit_layer, build_cors_layer, create_app};
use carepath_common::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        Config::global().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .json()
        .without_time()
        .init();

    info!("Initializing Carepath API Lambda");

    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| Error::from(format!("Database error: {}", e)))?;

    info!("Database connection established");

    let cors_origins = config.cors_allowed_origins.as_deref().ok_or_else(|| {
        Error::from("CORS_ALLOWED_ORIGINS environment variable is required")
    })?;

    let app = create_app(config, pool)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
        .layer(body_limit_layer());

    info!("Carepath API Lambda ready to serve requests");

    run(app).await
}
