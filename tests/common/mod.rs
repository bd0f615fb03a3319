//! Shared helpers for integration tests.
//!
//! Provides a recording orchestrator, sample inventories and small wrappers
//! around driving the router with `oneshot`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use tower::util::ServiceExt;

use huker_console::api::create_router;
use huker_console::models::{Action, HostInventory, Inventory, JobInventory, TaskBoard, TaskTarget};
use huker_console::services::{AgentDeployRequest, Orchestrator, RequestFailure, RequestOutcome};
use huker_console::state::AppState;

/// Inventory with a zookeeper job (tasks 0, 1) and a regionserver job (task 0)
pub fn sample_inventory() -> Inventory {
    Inventory {
        project: "hbase".to_string(),
        cluster: "hbase-test".to_string(),
        jobs: vec![
            JobInventory {
                name: "zookeeper".to_string(),
                hosts: vec![
                    HostInventory {
                        task_id: 0,
                        host: "zk0:9001".to_string(),
                    },
                    HostInventory {
                        task_id: 1,
                        host: "zk1:9001".to_string(),
                    },
                ],
            },
            JobInventory {
                name: "regionserver".to_string(),
                hosts: vec![HostInventory {
                    task_id: 0,
                    host: "rs0:9001".to_string(),
                }],
            },
        ],
    }
}

#[derive(Default)]
pub struct FakeOrchestrator {
    controls: Mutex<Vec<(Action, TaskTarget)>>,
    deploys: Mutex<Vec<AgentDeployRequest>>,
    /// (job, task_id) -> error text
    failing_tasks: HashMap<(String, u32), String>,
    failing_hosts: HashMap<String, String>,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_task(mut self, job: &str, task_id: u32, message: &str) -> Self {
        self.failing_tasks
            .insert((job.to_string(), task_id), message.to_string());
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
}

#[async_trait]
impl Orchestrator for FakeOrchestrator {
    async fn control(&self, action: Action, target: &TaskTarget) -> RequestOutcome {
        self.controls.lock().push((action, target.clone()));
        match self
            .failing_tasks
            .get(&(target.job.clone(), target.task_id))
        {
            Some(message) => Err(RequestFailure::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn deploy_agent(&self, request: &AgentDeployRequest) -> RequestOutcome {
        self.deploys.lock().push(request.clone());
        match self.failing_hosts.get(&request.host) {
            Some(message) => Err(RequestFailure::new(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn build_app_state(orchestrator: Arc<FakeOrchestrator>) -> AppState {
    AppState::new(TaskBoard::from_inventory(sample_inventory()), orchestrator)
}

pub fn build_app(state: AppState) -> Router {
    create_router(state)
}

/// Send a request and return the status plus the parsed JSON body (Null if empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).to_string())
        })
    };
    (status, json)
}

/// Poll until the condition holds or two seconds elapse
pub async fn wait_until<F, Fut>(mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while tokio::time::Instant::now() < deadline {
        if condition().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
