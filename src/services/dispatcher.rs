//! Bulk action dispatch over the board's selection.
//!
//! Every selected row gets its own task: the pending label is rendered up
//! front, then each task fires one orchestrator request and renders its own
//! outcome into its own row. A background join only tallies the results for
//! the log.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::{JoinHandle, JoinSet};
use uuid::Uuid;

use crate::error::UserWarning;
use crate::models::{Action, Phase, SelectedRow, StatusLabel};
use crate::services::orchestrator::Orchestrator;
use crate::state::SharedBoard;

/// Tally of one dispatch, produced once every row has completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    pub batch_id: Uuid,
    pub action: Action,
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Completions dropped because the board was re-rendered meanwhile
    pub stale: usize,
}

/// Handle returned to the caller of a dispatch
#[derive(Debug)]
pub struct Dispatched {
    pub batch_id: Uuid,
    pub action: Action,
    pub requested: usize,
    /// Resolves once all rows finished; dropping it does not cancel anything
    pub completion: JoinHandle<DispatchSummary>,
}

struct RowReport {
    succeeded: bool,
    applied: bool,
}

#[derive(Clone)]
pub struct BulkDispatcher {
    orchestrator: Arc<dyn Orchestrator>,
    board: SharedBoard,
}

impl BulkDispatcher {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, board: SharedBoard) -> Self {
        Self {
            orchestrator,
            board,
        }
    }

    /// Dispatch an action over the rows currently checked on the board
    pub async fn dispatch_selected(&self, action: Action) -> Result<Dispatched, UserWarning> {
        let selection = self.board.read().await.collect_selection();
        self.dispatch(action, selection).await
    }

    pub async fn dispatch(
        &self,
        action: Action,
        selection: Vec<SelectedRow>,
    ) -> Result<Dispatched, UserWarning> {
        if selection.is_empty() {
            tracing::warn!("Dispatch of {} rejected: no task selected", action);
            return Err(UserWarning::EmptySelection);
        }

        let batch_id = Uuid::new_v4();
        tracing::info!(
            "Dispatching {} to {} tasks (batch {})",
            action,
            selection.len(),
            batch_id
        );

        {
            let mut board = self.board.write().await;
            for row in &selection {
                board.apply(
                    row.index,
                    row.generation,
                    StatusLabel::render(action, Phase::Pending),
                );
            }
        }

        let mut tasks = JoinSet::new();
        for row in selection {
            let orchestrator = Arc::clone(&self.orchestrator);
            let board = self.board.clone();
            tasks.spawn(async move {
                tracing::debug!("{} {}", action, row.target);
                let outcome = orchestrator.control(action, &row.target).await;
                if let Err(failure) = &outcome {
                    tracing::warn!("{} failed for {}: {}", action, row.target, failure);
                }

                let label = StatusLabel::render(action, Phase::Done(&outcome));
                let applied = board.write().await.apply(row.index, row.generation, label);
                RowReport {
                    succeeded: outcome.is_ok(),
                    applied,
                }
            });
        }

        let requested = tasks.len();
        let completion = tokio::spawn(summarize(batch_id, action, requested, tasks));

        Ok(Dispatched {
            batch_id,
            action,
            requested,
            completion,
        })
    }
}

async fn summarize(
    batch_id: Uuid,
    action: Action,
    requested: usize,
    mut tasks: JoinSet<RowReport>,
) -> DispatchSummary {
    let mut summary = DispatchSummary {
        batch_id,
        action,
        requested,
        succeeded: 0,
        failed: 0,
        stale: 0,
    };

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(report) => {
                if report.succeeded {
                    summary.succeeded += 1;
                } else {
                    summary.failed += 1;
                }
                if !report.applied {
                    summary.stale += 1;
                }
            }
            Err(e) => {
                tracing::error!("Row task of batch {} aborted: {}", batch_id, e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "Batch {} ({}) finished: {} ok, {} failed, {} stale",
        batch_id,
        action,
        summary.succeeded,
        summary.failed,
        summary.stale
    );
    summary
}
