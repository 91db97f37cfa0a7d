use std::net::SocketAddr;

use route_server::cache::{CacheConfig, CachedTransitClient};
use route_server::pedestrian::{PedestrianClient, PedestrianConfig};
use route_server::planner::{PlannerConfig, RouteAggregator};
use route_server::transit::{TransitClient, TransitConfig};
use route_server::web::{AppState, create_router};

/// Default transit itinerary endpoint.
const DEFAULT_TRANSIT_URL: &str = "https://apis.openapi.sk.com/transit/routes";

/// Default pedestrian route endpoint.
const DEFAULT_PEDESTRIAN_URL: &str =
    "https://apis.openapi.sk.com/tmap/routes/pedestrian?version=1";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_server=debug,tower_http=debug".into()),
        )
        .init();

    // Get credentials from environment
    let app_key = std::env::var("ROUTE_APP_KEY").unwrap_or_else(|_| {
        tracing::warn!("ROUTE_APP_KEY not set, provider calls will fail");
        String::new()
    });
    let transit_url =
        std::env::var("TRANSIT_URL").unwrap_or_else(|_| DEFAULT_TRANSIT_URL.to_string());
    let pedestrian_url =
        std::env::var("PEDESTRIAN_URL").unwrap_or_else(|_| DEFAULT_PEDESTRIAN_URL.to_string());

    // Create provider clients
    let transit_config = TransitConfig::new(&app_key, transit_url);
    let transit_client =
        TransitClient::new(transit_config).expect("failed to create transit client");
    let cached_transit = CachedTransitClient::new(transit_client, &CacheConfig::default());

    let pedestrian_config = PedestrianConfig::new(&app_key, pedestrian_url);
    let pedestrian_client =
        PedestrianClient::new(pedestrian_config).expect("failed to create pedestrian client");

    // Build app state
    let aggregator = RouteAggregator::new(
        cached_transit,
        pedestrian_client,
        PlannerConfig::default(),
    );
    let state = AppState::new(aggregator);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "route server listening");
    tracing::info!("  GET  /health            - health check");
    tracing::info!("  POST /routes/waypoints  - plan a multi-waypoint trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
