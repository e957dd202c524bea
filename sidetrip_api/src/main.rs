mod error;
mod panel;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use sidetrip_providers::directions::{DirectionsClient, DirectionsProvider, TravelMode};
use sidetrip_providers::places::{PlacesClient, PlacesProvider};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let state = Arc::new(AppState::new(
        DirectionsClient::from_env()?,
        PlacesClient::from_env()?,
        DirectionsProvider::GoogleApi {
            mode: TravelMode::Driving,
        },
        PlacesProvider::GoogleApi,
    ));

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/panels", post(panel::create::create_panel_handler))
        .route("/panels/{panel_id}", get(panel::get::get_panel_handler))
        .route(
            "/panels/{panel_id}/route",
            post(panel::route::route_handler),
        )
        .route(
            "/panels/{panel_id}/waypoints/toggle",
            post(panel::toggle::toggle_waypoint_handler),
        )
        .route(
            "/panels/{panel_id}/sidebar",
            post(panel::sidebar::toggle_sidebar_handler),
        )
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let bind_addr =
        std::env::var("SIDETRIP_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("sidetrip api listening on {bind_addr}");

    serve(listener, app).await?;

    Ok(())
}
