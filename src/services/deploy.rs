use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::{JoinHandle, JoinSet};

use crate::services::orchestrator::{AgentDeployRequest, Orchestrator};

/// Agent deployment form: credentials plus a newline-separated host list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployForm {
    pub ssh_user: String,
    #[serde(default)]
    pub ssh_private_key: String,
    #[serde(default)]
    pub ssh_password: String,
    pub huker_agent_root_dir: String,
    #[serde(default)]
    pub hosts: String,
}

impl DeployForm {
    fn request_for(&self, host: String) -> AgentDeployRequest {
        AgentDeployRequest {
            ssh_user: self.ssh_user.clone(),
            ssh_private_key: self.ssh_private_key.clone(),
            ssh_password: self.ssh_password.clone(),
            huker_agent_root_dir: self.huker_agent_root_dir.clone(),
            host,
        }
    }
}

/// Split a host list into trimmed, non-blank host names
pub fn parse_hosts(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}

/// One line of the deployment progress log
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEntry {
    pub host: String,
    pub success: bool,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Append-only progress log, in order of arrival
#[derive(Clone, Default)]
pub struct ProgressLog {
    entries: Arc<Mutex<Vec<ProgressEntry>>>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: ProgressEntry) {
        self.entries.lock().push(entry);
    }

    pub fn entries(&self) -> Vec<ProgressEntry> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[derive(Debug)]
pub struct DeployRun {
    pub hosts: Vec<String>,
    /// Resolves to the number of failed hosts once every host completed
    pub completion: JoinHandle<usize>,
}

#[derive(Clone)]
pub struct AgentDeployer {
    orchestrator: Arc<dyn Orchestrator>,
    log: ProgressLog,
}

impl AgentDeployer {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, log: ProgressLog) -> Self {
        Self { orchestrator, log }
    }

    pub fn log(&self) -> &ProgressLog {
        &self.log
    }

    /// Fire one deployment per host; each completion appends to the log
    pub fn deploy(&self, form: &DeployForm) -> DeployRun {
        let hosts = parse_hosts(&form.hosts);
        tracing::info!("Deploying agent to {} hosts", hosts.len());

        let mut tasks = JoinSet::new();
        for host in &hosts {
            let request = form.request_for(host.clone());
            let orchestrator = Arc::clone(&self.orchestrator);
            let log = self.log.clone();
            tasks.spawn(async move {
                let outcome = orchestrator.deploy_agent(&request).await;
                let entry = match &outcome {
                    Ok(()) => ProgressEntry {
                        message: format!("Host: {} deploy successfully", request.host),
                        host: request.host,
                        success: true,
                        at: Utc::now(),
                    },
                    Err(failure) => {
                        tracing::warn!("Agent deployment on {} failed: {}", request.host, failure);
                        ProgressEntry {
                            message: format!(
                                "Failed to deploy huker agent on host: {}, reason: {}",
                                request.host, failure
                            ),
                            host: request.host,
                            success: false,
                            at: Utc::now(),
                        }
                    }
                };
                log.append(entry);
                outcome.is_ok()
            });
        }

        let completion = tokio::spawn(async move {
            let mut failed = 0;
            while let Some(joined) = tasks.join_next().await {
                if !matches!(joined, Ok(true)) {
                    failed += 1;
                }
            }
            tracing::info!("Agent deployment finished with {} failures", failed);
            failed
        });

        DeployRun { hosts, completion }
    }
}
