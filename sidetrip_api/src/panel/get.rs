use std::sync::Arc;

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;
use crate::panel::view::PanelView;
use crate::state::AppState;

pub async fn get_panel_handler(
    State(state): State<Arc<AppState>>,
    Path(panel_id): Path<Uuid>,
) -> Result<PanelView, ApiError> {
    let panels = state.panels.read();
    let panel = panels
        .get(&panel_id)
        .ok_or_else(|| ApiError::panel_not_found(panel_id))?;

    Ok(PanelView::from_panel(panel))
}
