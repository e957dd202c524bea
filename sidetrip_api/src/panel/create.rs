use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sidetrip_core::geopoint::GeoPoint;
use sidetrip_core::map_view::{DEFAULT_CENTER, DEFAULT_ZOOM};
use sidetrip_core::panel::TripPanel;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Serialize)]
pub struct CreatePanelResponse {
    panel_id: Uuid,
    center: GeoPoint,
    zoom: u8,
}

impl IntoResponse for CreatePanelResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn create_panel_handler(State(state): State<Arc<AppState>>) -> CreatePanelResponse {
    let panel_id = Uuid::new_v4();

    state.panels.write().insert(panel_id, TripPanel::new());
    info!("created panel {panel_id}");

    CreatePanelResponse {
        panel_id,
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
    }
}
