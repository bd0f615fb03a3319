use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::extractors::ActionPath;
use crate::error::Result;
use crate::models::Action;
use crate::state::AppState;

/// Create action dispatch routes
pub fn actions_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_actions))
        .route("/:action", post(dispatch_action))
        .with_state(state)
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ActionInfo {
    pub action: Action,
    pub pending: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DispatchAccepted {
    pub batch_id: Uuid,
    pub action: Action,
    pub requested: usize,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

/// List the lifecycle actions and their labels
async fn list_actions() -> Json<Vec<ActionInfo>> {
    Json(
        Action::all()
            .into_iter()
            .map(|action| {
                let labels = action.labels();
                ActionInfo {
                    action,
                    pending: labels.pending,
                    success: labels.success,
                    failure: labels.failure,
                }
            })
            .collect(),
    )
}

/// Fire an action at every checked row; outcomes land on the board
async fn dispatch_action(
    State(state): State<AppState>,
    ActionPath(action): ActionPath,
) -> Result<(StatusCode, Json<DispatchAccepted>)> {
    let dispatched = state.dispatcher.dispatch_selected(action).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(DispatchAccepted {
            batch_id: dispatched.batch_id,
            action: dispatched.action,
            requested: dispatched.requested,
        }),
    ))
}
