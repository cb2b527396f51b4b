use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_search::cache::SearchCache;
use train_search::config::AppConfig;
use train_search::search::TrainSearchService;
use train_search::stations::StationIndex;
use train_search::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let stations = match &config.stations_path {
        Some(path) => StationIndex::load(path)?,
        None => StationIndex::builtin()?,
    };
    info!(count = stations.len(), "loaded stations");

    if config.rail_api.is_active() {
        info!(base_url = %config.rail_api.base_url, "remote rail API enabled");
    } else {
        info!("remote rail API disabled; serving curated and fallback data");
    }

    let cache = SearchCache::new(&config.cache);
    let search = TrainSearchService::with_default_providers(config.rail_api.clone(), cache)?;
    let app = create_router(AppState::new(search, stations));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "train search listening");
    info!("  GET    /health");
    info!("  GET    /api/stations/search?q=");
    info!("  GET    /api/trains/search?from=&to=&date=&class=&quota=");
    info!("  DELETE /api/trains/cache");

    axum::serve(listener, app).await?;
    Ok(())
}
