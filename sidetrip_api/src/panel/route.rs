use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use sidetrip_core::waypoint::Waypoint;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RouteRequestBody {
    source: String,
    destination: String,
}

#[derive(Serialize)]
pub struct RouteResponseBody {
    route_found: bool,
    distance: String,
    waypoints: Vec<Waypoint>,
    /// User-facing warning when the provider returned no route
    notice: Option<String>,
}

impl IntoResponse for RouteResponseBody {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    Path(panel_id): Path<Uuid>,
    Json(body): Json<RouteRequestBody>,
) -> Result<RouteResponseBody, ApiError> {
    // the panel lock is never held across the provider await; the
    // ticket decides at apply time whether this response still counts
    let ticket = {
        let mut panels = state.panels.write();
        let panel = panels
            .get_mut(&panel_id)
            .ok_or_else(|| ApiError::panel_not_found(panel_id))?;
        panel
            .begin_route_request(&body.source, &body.destination)
            .map_err(|error| ApiError::BadRequest(error.to_string()))?
    };

    let response = state
        .directions
        .fetch_route(&body.source, &body.destination, &state.directions_provider)
        .await?;
    let outcome = response.into_outcome();

    let mut rng = SmallRng::from_os_rng();
    let mut panels = state.panels.write();
    let panel = panels
        .get_mut(&panel_id)
        .ok_or_else(|| ApiError::panel_not_found(panel_id))?;
    let notice = panel.apply_route_outcome(&ticket, &outcome, &mut rng);

    Ok(RouteResponseBody {
        route_found: panel.route_found(),
        distance: panel.distance_text().to_owned(),
        waypoints: panel.waypoints().to_vec(),
        notice: notice.map(|notice| notice.to_string()),
    })
}
