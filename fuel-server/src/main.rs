use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fuel_server::cities::CityDirectory;
use fuel_server::config::ServerConfig;
use fuel_server::planner::TripConfig;
use fuel_server::routing::{
    CachedRouter, DEFAULT_GRAPHHOPPER_URL, FallbackRouter, GraphHopperClient, OsrmClient,
    ProviderConfig, RouteCacheConfig, RouteSource, StaticRouter,
};
use fuel_server::stations::{InMemoryCatalog, load_snapshot};
use fuel_server::trip::TripPlanner;
use fuel_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "fuel_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = InMemoryCatalog::new(load_snapshot(&config.stations_path)?);
    info!(stations = catalog.len(), path = %config.stations_path.display(), "loaded station snapshot");

    let cities = CityDirectory::load(&config.cities_path)?;
    if cities.is_empty() {
        warn!(path = %config.cities_path.display(), "city directory is empty, every request will be rejected");
    }

    let average_price = config
        .average_fuel_price
        .or_else(|| catalog.average_price())
        .ok_or("no average fuel price available")?;
    info!(average_price, "short trips use average fuel price");

    let sources = route_sources(&config)?;
    info!(
        providers = ?sources.iter().map(RouteSource::name).collect::<Vec<_>>(),
        "route providers"
    );
    let router = CachedRouter::new(
        FallbackRouter::from_sources(sources),
        &RouteCacheConfig::default().with_ttl(config.route_cache_ttl),
    );

    let planner = TripPlanner::new(router, catalog, cities, TripConfig::default(), average_price);
    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "fuel route planner listening");
    info!("GET /api/trip/{{start_city}}/{{finish_city}}  - plan a trip, e.g. /api/trip/gila-bend/phoenix");
    info!("GET /health                               - health check");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Route providers in the order they are tried.
fn route_sources(config: &ServerConfig) -> Result<Vec<RouteSource>, Box<dyn Error>> {
    if config.offline_routing {
        return Ok(vec![RouteSource::Straight(StaticRouter::default())]);
    }

    let mut sources = Vec::new();

    if let Some(key) = &config.graphhopper_api_key {
        let gh = ProviderConfig::new(DEFAULT_GRAPHHOPPER_URL).with_api_key(key);
        sources.push(RouteSource::GraphHopper(GraphHopperClient::new(gh)?));
    }

    let osrm = ProviderConfig::new(&config.osrm_base_url);
    sources.push(RouteSource::Osrm(OsrmClient::new(osrm)?));

    Ok(sources)
}
