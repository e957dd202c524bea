use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sidetrip_core::attraction::Attraction;
use sidetrip_core::map_view::MapView;
use sidetrip_core::panel::TripPanel;
use sidetrip_core::waypoint::Waypoint;

/// Full serialized panel state, the body of `GET /panels/{id}`.
#[derive(Serialize)]
pub struct PanelView {
    pub source: String,
    pub destination: String,
    pub route_found: bool,
    pub distance: String,
    pub waypoints: Vec<Waypoint>,
    pub selected_waypoints: Vec<Waypoint>,
    pub attractions: Vec<Attraction>,
    pub map: MapView,
    pub sidebar_open: bool,
    pub notice: Option<String>,
}

impl PanelView {
    pub fn from_panel(panel: &TripPanel) -> Self {
        PanelView {
            source: panel.source().to_owned(),
            destination: panel.destination().to_owned(),
            route_found: panel.route_found(),
            distance: panel.distance_text().to_owned(),
            waypoints: panel.waypoints().to_vec(),
            selected_waypoints: panel.selected_waypoints().to_vec(),
            attractions: panel.attractions().to_view(),
            map: panel.map().clone(),
            sidebar_open: panel.sidebar_open(),
            notice: panel.last_notice().map(ToString::to_string),
        }
    }
}

impl IntoResponse for PanelView {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
