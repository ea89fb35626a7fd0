//! Backend entry-point: loads settings, prepares persistence, and serves the
//! REST API with health probes and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::outbound::security::BcryptPasswordHasher;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let hasher = BcryptPasswordHasher::new(settings.bcrypt_cost())?;
    let mut config = ServerConfig::new(bind_addr, hasher);

    match settings.database_url() {
        Some(url) => {
            let applied = run_pending_migrations(url)
                .await
                .wrap_err("database migration failed")?;
            info!(applied, "database schema up to date");
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; data will not survive a restart"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await?;
    Ok(())
}
