//! Application bootstrapper
//!
//! Handles all initialization and setup for the console.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::CONFIG;
use crate::models::{Inventory, TaskBoard};
use crate::services::HttpOrchestrator;
use crate::state::AppState;

/// Bootstrap and run the application
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting huker-console v{}", env!("CARGO_PKG_VERSION"));

    let state = init_services()?;
    let app = create_app(state);

    serve(app).await
}

/// Initialize tracing/logging; JSON lines when `HUKER_CONSOLE_LOG_FORMAT=json`
fn init_tracing() {
    let json = CONFIG.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("huker_console={},tower_http=info", CONFIG.log_level).into()
            }),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Initialize all application services
fn init_services() -> anyhow::Result<AppState> {
    let board = TaskBoard::from_inventory(init_inventory()?);
    tracing::info!(
        "Board ready for {}/{} with {} tasks",
        board.project,
        board.cluster,
        board.rows.len()
    );

    let orchestrator = HttpOrchestrator::new(CONFIG.endpoint_base());
    tracing::info!("Orchestrator endpoint base: {}", orchestrator.endpoint_base());

    Ok(AppState::new(board, Arc::new(orchestrator)))
}

/// Load the inventory file, or start from an empty board
fn init_inventory() -> anyhow::Result<Inventory> {
    match &CONFIG.inventory_path {
        Some(path) => Ok(Inventory::load(path)?),
        None => {
            tracing::info!("No inventory configured - starting with an empty board");
            Ok(Inventory::empty(&CONFIG.project, &CONFIG.cluster))
        }
    }
}

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
