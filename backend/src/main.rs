//! Service entry point: loads settings, prepares the catalogue store and
//! serves the REST API.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jeep_sales::inbound::http::health::HealthState;
use jeep_sales::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
#[cfg(feature = "metrics")]
use jeep_sales::server::make_metrics;
use jeep_sales::server::{ServerConfig, create_server};
use jeep_sales::settings::Settings;

async fn apply_migrations(database_url: String) -> std::io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");
    Ok(())
}

async fn build_config(settings: &Settings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    let Some(database_url) = settings.database_url.clone() else {
        warn!("no database URL configured; serving the bundled catalogue");
        return Ok(config);
    };

    info!(
        database = settings.redacted_database_url().as_deref().unwrap_or_default(),
        "connecting to catalogue database"
    );
    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        apply_migrations(database_url.clone()).await?;
    }

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load_from_env().map_err(std::io::Error::other)?;
    let config = build_config(&settings).await?;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let bind_addr = config.bind_addr();
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "jeep sales service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
