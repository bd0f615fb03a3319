pub mod actions;
pub mod board;
pub mod deploy;
pub mod extractors;

use axum::{http::header, response::IntoResponse, routing::get, Router};

use crate::config::CONFIG;
use crate::services::tsdb_schema::{render_hbase_script, tsdb_tables};
use crate::state::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new().nest("/api", api_routes(state))
}

/// API routes under /api/*
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/system/version", get(get_version))
        .route("/provisioning/tsdb-schema", get(tsdb_schema))
        .nest("/board", board::board_routes(state.clone()))
        .nest("/actions", actions::actions_routes(state.clone()))
        .nest("/deploy-agents", deploy::deploy_routes(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Version info endpoint
async fn get_version() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "version": CONFIG.version,
        "commit_hash": CONFIG.commit_hash,
        "build_time": CONFIG.build_time,
        "orchestrator": CONFIG.endpoint_base(),
    }))
}

/// HBase shell script provisioning the time-series tables
async fn tsdb_schema() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_hbase_script(&tsdb_tables()),
    )
}
