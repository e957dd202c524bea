use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use sidetrip_core::attraction::Attraction;
use sidetrip_core::geopoint::GeoPoint;
use sidetrip_core::map_view::Marker;
use sidetrip_core::waypoint::Waypoint;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ToggleWaypointBody {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
pub struct ToggleWaypointResponse {
    selected_waypoints: Vec<Waypoint>,
    attractions: Vec<Attraction>,
    markers: Vec<Marker>,
}

impl IntoResponse for ToggleWaypointResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn toggle_waypoint_handler(
    State(state): State<Arc<AppState>>,
    Path(panel_id): Path<Uuid>,
    Json(body): Json<ToggleWaypointBody>,
) -> Result<ToggleWaypointResponse, ApiError> {
    let location = GeoPoint::new(body.lat, body.lng);

    let burst = {
        let mut panels = state.panels.write();
        let panel = panels
            .get_mut(&panel_id)
            .ok_or_else(|| ApiError::panel_not_found(panel_id))?;
        let waypoint = panel.find_waypoint(&location).cloned().ok_or_else(|| {
            ApiError::NotFound(format!("No waypoint at {},{}", body.lat, body.lng))
        })?;
        panel.toggle_waypoint(&waypoint)
    };

    // one independent query per selected waypoint, completion order
    // unspecified
    let outcomes = join_all(
        burst
            .locations
            .iter()
            .map(|location| state.places.fetch_nearby(*location, &state.places_provider)),
    )
    .await;

    let mut panels = state.panels.write();
    let panel = panels
        .get_mut(&panel_id)
        .ok_or_else(|| ApiError::panel_not_found(panel_id))?;
    for outcome in outcomes {
        match outcome {
            Ok(response) => {
                panel.apply_nearby_outcome(&burst.ticket, response.into_outcome());
            }
            // places failures yield no markers and no user notice
            Err(error) => debug!("nearby search failed: {error:#}"),
        }
    }

    Ok(ToggleWaypointResponse {
        selected_waypoints: panel.selected_waypoints().to_vec(),
        attractions: panel.attractions().to_view(),
        markers: panel.map().markers().to_vec(),
    })
}
