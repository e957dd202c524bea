use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SidebarResponse {
    sidebar_open: bool,
}

impl IntoResponse for SidebarResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn toggle_sidebar_handler(
    State(state): State<Arc<AppState>>,
    Path(panel_id): Path<Uuid>,
) -> Result<SidebarResponse, ApiError> {
    let mut panels = state.panels.write();
    let panel = panels
        .get_mut(&panel_id)
        .ok_or_else(|| ApiError::panel_not_found(panel_id))?;

    Ok(SidebarResponse {
        sidebar_open: panel.toggle_sidebar(),
    })
}
