use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Inventory, TaskBoard};
use crate::state::AppState;

/// Create board routes
pub fn board_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_board).put(replace_board))
        .route("/rows/:index/checked", put(set_row_checked))
        .route("/select-all", post(select_all))
        .with_state(state)
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CheckedUpdate {
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectAll {
    pub checked: bool,
    /// Restrict the toggle to one job's rows
    pub job: Option<String>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn get_board(State(state): State<AppState>) -> Json<TaskBoard> {
    Json(state.board.read().await.clone())
}

/// Re-render the board from an inventory document
async fn replace_board(
    State(state): State<AppState>,
    Json(inventory): Json<Inventory>,
) -> Json<TaskBoard> {
    let mut board = state.board.write().await;
    tracing::info!(
        "Rendering board for {}/{} with {} tasks",
        inventory.project,
        inventory.cluster,
        inventory.task_count()
    );
    board.render(inventory);
    Json(board.clone())
}

async fn set_row_checked(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(update): Json<CheckedUpdate>,
) -> Result<Json<TaskBoard>> {
    let mut board = state.board.write().await;
    board.set_checked(index, update.checked)?;
    Ok(Json(board.clone()))
}

async fn select_all(
    State(state): State<AppState>,
    Json(request): Json<SelectAll>,
) -> Json<TaskBoard> {
    let mut board = state.board.write().await;
    board.toggle_all(request.checked, request.job.as_deref());
    Json(board.clone())
}
