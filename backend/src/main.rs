//! Item service entry point: loads settings, builds the shared state once and
//! runs the HTTP server across a fixed set of worker units.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use item_service::domain::ItemService;
use item_service::inbound::http::health::HealthState;
use item_service::inbound::http::state::HttpState;
use item_service::outbound::events::{ItemEventBus, audit_created_items};
use item_service::outbound::persistence::{PooledItemRepository, SharedPool};
use item_service::settings::ServiceSettings;

use server::{ServerConfig, create_server, drain_on_signal};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings =
        ServiceSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;

    let pool = Arc::new(SharedPool::new(settings.pool_config()));
    // bb8's reaper runs on the runtime that builds the pool.
    if let Err(err) = pool.pool().await {
        warn!(error = %err, "database pool unavailable at startup; first acquire retries");
    }
    let events = Arc::new(ItemEventBus::new(settings.event_capacity()));
    actix_web::rt::spawn(audit_created_items(events.subscribe()));

    let repository = Arc::new(PooledItemRepository::new(Arc::clone(&pool)));
    let service = Arc::new(ItemService::new(repository, Arc::clone(&events)));
    let http_state = web::Data::new(HttpState::from_service(service));
    let health_state = web::Data::new(HealthState::new());

    let server = create_server(
        health_state.clone(),
        http_state,
        ServerConfig::from_settings(&settings),
    )
    .wrap_err("failed to start HTTP server")?;
    actix_web::rt::spawn(drain_on_signal(health_state, server.handle()));
    server.await.wrap_err("HTTP server failed")?;

    drop(events);
    SharedPool::shutdown(pool);
    info!("item service stopped");
    Ok(())
}
