//! Backend entry-point: loads settings, seeds the catalogue and serves HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use academy::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
use academy::inbound::http::health::HealthState;
use academy::outbound::memory::MemoryStore;
use server::{MemoryAdapters, ServerSettings, create_server};

/// Settings are read from the environment; only the program name is passed on.
fn program_args() -> Vec<OsString> {
    std::env::args_os().take(1).collect()
}

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

    let server_settings = ServerSettings::load_from_iter(program_args())
        .map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let seed_settings = CatalogueSeedSettings::load_from_iter(program_args())
        .map_err(|err| eyre!("failed to load catalogue seed settings: {err}"))?;
    let bind_addr = server_settings.bind_addr()?;

    let store = MemoryStore::new();
    let adapters = MemoryAdapters::new(&store);
    seed_catalogue_on_startup(&seed_settings, adapters.courses.clone())
        .await
        .wrap_err("catalogue seeding failed")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &adapters, bind_addr)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "academy listening");
    server.await.wrap_err("server terminated with an error")
}
