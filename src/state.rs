use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::TaskBoard;
use crate::services::deploy::{AgentDeployer, ProgressLog};
use crate::services::dispatcher::BulkDispatcher;
use crate::services::orchestrator::Orchestrator;

/// Shared task board state
pub type SharedBoard = Arc<RwLock<TaskBoard>>;

/// Application state containing all shared resources
#[derive(Clone)]
pub struct AppState {
    pub board: SharedBoard,
    pub dispatcher: BulkDispatcher,
    pub deployer: AgentDeployer,
}

impl AppState {
    pub fn new(board: TaskBoard, orchestrator: Arc<dyn Orchestrator>) -> Self {
        let board = Arc::new(RwLock::new(board));
        Self {
            dispatcher: BulkDispatcher::new(Arc::clone(&orchestrator), board.clone()),
            deployer: AgentDeployer::new(orchestrator, ProgressLog::new()),
            board,
        }
    }
}
