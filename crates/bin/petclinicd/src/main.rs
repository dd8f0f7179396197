//! # petclinicd — petclinic daemon
//!
//! Composition root that wires the customers, vets and visits modules together.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct repository implementations (adapters)
//! - Construct business services, injecting repositories and the event bus via port traits
//! - Hand the customers and vets services to the visits module as validators
//! - Log every domain event from a background task
//! - Seed demo data, then run until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod listener;
mod seed;
mod wiring;

use std::sync::Arc;

use petclinic_app::event_bus::InProcessEventBus;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::wiring::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Event bus
    let bus = Arc::new(InProcessEventBus::new(config.events.capacity));
    let event_log = listener::spawn(bus.subscribe());

    // Services
    let services = Services::build(&bus);

    if config.seed.enabled {
        seed::seed(&services).await?;
    }

    tracing::info!("petclinicd running, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    // the event log stops once every publisher is gone
    drop(services);
    drop(bus);
    let logged = event_log.await?;
    tracing::debug!(logged, "event log drained");

    Ok(())
}
