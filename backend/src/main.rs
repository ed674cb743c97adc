//! Service entry-point: loads settings, wires adapters, starts the sync
//! scheduler and serves the offer API.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use job_offers::domain::OfferSyncScheduler;
use job_offers::domain::ports::OffersCommand;
use job_offers::inbound::http::health::HealthState;
use job_offers::settings::AppSettings;

use server::{build_http_state, build_offer_facade, build_server_config, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = build_server_config(&settings).await?;

    let facade = build_offer_facade(&config);
    let command: Arc<dyn OffersCommand> = facade.clone();
    let scheduler = OfferSyncScheduler::new(command, settings.scheduler_config()).start();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), build_http_state(facade), &config)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(bind_addr = %config.bind_addr(), "job offers service listening");

    let served = server.await;
    health_state.mark_unhealthy();
    scheduler.stop().await;
    served.wrap_err("HTTP server failed")
}
