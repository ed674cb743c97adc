//! Builders turning settings into adapters, the offer facade and HTTP state.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use job_offers::domain::ports::OfferRepository;
use job_offers::domain::{OfferFacade, OfferSyncService};
use job_offers::inbound::http::state::HttpState;
use job_offers::outbound::memory::InMemoryOfferRepository;
use job_offers::outbound::offers_http::RemoteOfferHttpSource;
use job_offers::outbound::persistence::{
    DbPool, DieselOfferRepository, PoolConfig, run_pending_migrations,
};
use job_offers::settings::AppSettings;

use super::ServerConfig;

/// Build a [`ServerConfig`] from settings, connecting to PostgreSQL and the
/// remote provider when they are configured.
///
/// # Errors
/// Fails when migrations cannot be applied, the pool cannot be built or the
/// remote base URL is unusable.
pub async fn build_server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let mut config = ServerConfig::new(settings.bind_addr());

    match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .wrap_err("failed to migrate offers database")?;
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await
            .wrap_err("failed to build database pool")?;
            info!(max_connections = settings.db_max_connections(), "using PostgreSQL offer store");
            config = config.with_db_pool(pool);
        }
        None => warn!("no database url configured; offers are kept in memory"),
    }

    match settings.remote_base_url() {
        Some(base_url) => {
            let source = RemoteOfferHttpSource::new(base_url, settings.remote_timeout())
                .wrap_err("failed to build remote offer client")?;
            info!(endpoint = %source.endpoint(), "remote offer source configured");
            config = config.with_remote_source(Arc::new(source));
        }
        None => warn!("no remote offer provider configured; syncs fetch nothing"),
    }

    Ok(config)
}

/// Select the repository: Diesel when a pool is configured, memory otherwise.
fn build_repository(config: &ServerConfig) -> Arc<dyn OfferRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselOfferRepository::new(pool.clone())),
        None => Arc::new(InMemoryOfferRepository::new()),
    }
}

/// Wire the sync service and facade over the configured adapters.
pub fn build_offer_facade(config: &ServerConfig) -> Arc<OfferFacade> {
    let repository = build_repository(config);
    let sync_service = OfferSyncService::new(config.remote_source.clone(), repository.clone());
    Arc::new(OfferFacade::new(repository, sync_service))
}

/// Expose the facade to HTTP handlers through both driving ports.
pub fn build_http_state(facade: Arc<OfferFacade>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(facade.clone(), facade))
}
