use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::services::deploy::{DeployForm, ProgressEntry};
use crate::state::AppState;

/// Create agent deployment routes
pub fn deploy_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(deploy_agents))
        .route("/log", get(get_log).delete(clear_log))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct DeployAccepted {
    pub requested: usize,
    pub hosts: Vec<String>,
}

/// Start one agent deployment per host in the form
async fn deploy_agents(
    State(state): State<AppState>,
    Json(form): Json<DeployForm>,
) -> (StatusCode, Json<DeployAccepted>) {
    let run = state.deployer.deploy(&form);
    (
        StatusCode::ACCEPTED,
        Json(DeployAccepted {
            requested: run.hosts.len(),
            hosts: run.hosts,
        }),
    )
}

async fn get_log(State(state): State<AppState>) -> Json<Vec<ProgressEntry>> {
    Json(state.deployer.log().entries())
}

async fn clear_log(State(state): State<AppState>) -> StatusCode {
    state.deployer.log().clear();
    StatusCode::NO_CONTENT
}
