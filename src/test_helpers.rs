//! Test helpers for unit tests.
//!
//! Provides a recording orchestrator that can be told to fail specific
//! tasks or hosts and to hold every request until released.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{watch, RwLock};

use crate::models::{Action, HostInventory, Inventory, JobInventory, TaskBoard, TaskTarget};
use crate::services::orchestrator::{
    AgentDeployRequest, Orchestrator, RequestFailure, RequestOutcome,
};
use crate::state::SharedBoard;

/// Inventory with one job of three tasks (ids 0, 1, 2)
pub fn sample_inventory() -> Inventory {
    Inventory {
        project: "hbase".to_string(),
        cluster: "hbase-test".to_string(),
        jobs: vec![JobInventory {
            name: "regionserver".to_string(),
            hosts: (0..3)
                .map(|task_id| HostInventory {
                    task_id,
                    host: format!("rs{}.example.com:9001", task_id),
                })
                .collect(),
        }],
    }
}

pub fn sample_board() -> TaskBoard {
    TaskBoard::from_inventory(sample_inventory())
}

pub fn shared(board: TaskBoard) -> SharedBoard {
    Arc::new(RwLock::new(board))
}

pub struct RecordingOrchestrator {
    controls: Mutex<Vec<(Action, TaskTarget)>>,
    deploys: Mutex<Vec<AgentDeployRequest>>,
    failing_tasks: HashMap<u32, String>,
    failing_hosts: HashMap<String, String>,
    gate: watch::Sender<bool>,
}

impl Default for RecordingOrchestrator {
    fn default() -> Self {
        let (gate, _) = watch::channel(true);
        Self {
            controls: Mutex::new(Vec::new()),
            deploys: Mutex::new(Vec::new()),
            failing_tasks: HashMap::new(),
            failing_hosts: HashMap::new(),
            gate,
        }
    }
}

impl RecordingOrchestrator {
    /// Hold every request until `resume` is called
    pub fn paused(self) -> Self {
        self.gate.send_replace(false);
        self
    }

    pub fn resume(&self) {
        self.gate.send_replace(true);
    }

    pub fn fail_task(mut self, task_id: u32, message: &str) -> Self {
        self.failing_tasks.insert(task_id, message.to_string());
        self
    }

    pub fn fail_host(mut self, host: &str, message: &str) -> Self {
        self.failing_hosts
            .insert(host.to_string(), message.to_string());
        self
    }

    pub fn control_calls(&self) -> Vec<(Action, TaskTarget)> {
        self.controls.lock().clone()
    }

    pub fn deploy_calls(&self) -> Vec<AgentDeployRequest> {
        self.deploys.lock().clone()
    }

    async fn wait_for_gate(&self) {
        let mut rx = self.gate.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

#[async_trait]
impl Orchestrator for RecordingOrchestrator {
    async fn control(&self, action: Action, target: &TaskTarget) -> RequestOutcome {
        self.controls.lock().push((action, target.clone()));
        self.wait_for_gate().await;
        match self.failing_tasks.get(&target.task_id) {
            Some(message) => Err(RequestFailure::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn deploy_agent(&self, request: &AgentDeployRequest) -> RequestOutcome {
        self.deploys.lock().push(request.clone());
        self.wait_for_gate().await;
        match self.failing_hosts.get(&request.host) {
            Some(message) => Err(RequestFailure::new(message.clone())),
            None => Ok(()),
        }
    }
}
