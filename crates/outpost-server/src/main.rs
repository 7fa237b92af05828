use sqlx::PgPool;
use std::sync::Arc;

mod adapters;
mod application;
mod config;
mod error;
mod extract;
mod models;
mod routes;

use adapters::{PgCallAttemptRepository, PgProductRepository, ReqwestTransport};
use application::{CallExecutor, GatewayService, ProductService};
use config::GatewayConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayService>,
    pub product_service: Arc<ProductService>,
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🛰️  Outpost API initializing...");

    let config = GatewayConfig::from_lookup(|key| secrets.get(key))
        .map_err(|e| anyhow::anyhow!("Invalid gateway configuration: {e}"))?;

    tracing::info!(
        weather = %config.weather_api_url,
        exchange_rates = %config.exchange_rate_api_url,
        timeout_secs = config.timeout.as_secs(),
        "🔧 Provider endpoints configured"
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {e}"))?;

    tracing::info!("✅ Database migrations completed");

    let transport = ReqwestTransport::new(config.timeout, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

    // Initialize application services
    let audit = Arc::new(PgCallAttemptRepository::new(pool.clone()));
    let product_repo = Arc::new(PgProductRepository::new(pool));
    let executor = CallExecutor::new(Arc::new(transport), audit.clone());

    let state = AppState {
        gateway: Arc::new(GatewayService::new(&config, executor, audit)),
        product_service: Arc::new(ProductService::new(product_repo)),
    };

    let router = routes::app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Outpost API ready");

    Ok(router.into())
}
