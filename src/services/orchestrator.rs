//! Client side of the orchestrator HTTP API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Action, TaskTarget};

/// Error text reported for a single request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of one orchestrator call
pub type RequestOutcome = std::result::Result<(), RequestFailure>;

/// Body of `POST /api/deploy-agent`, one per host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDeployRequest {
    pub ssh_user: String,
    pub ssh_private_key: String,
    pub ssh_password: String,
    pub huker_agent_root_dir: String,
    pub host: String,
}

/// Operations the console needs from the orchestrator
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Fire one lifecycle action at one task
    async fn control(&self, action: Action, target: &TaskTarget) -> RequestOutcome;

    /// Deploy the agent on one host
    async fn deploy_agent(&self, request: &AgentDeployRequest) -> RequestOutcome;
}

/// reqwest-backed orchestrator client
pub struct HttpOrchestrator {
    endpoint_base: String,
    client: reqwest::Client,
}

impl HttpOrchestrator {
    pub fn new(endpoint_base: impl Into<String>) -> Self {
        Self {
            endpoint_base: endpoint_base.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint_base(&self) -> &str {
        &self.endpoint_base
    }

    pub fn control_url(&self, action: Action, target: &TaskTarget) -> String {
        format!("{}{}", self.endpoint_base, target.path(action))
    }

    /// Turn a response into an outcome; non-2xx bodies become the error text,
    /// prefixed with the status line when `with_status` is set
    async fn outcome(
        response: reqwest::Result<reqwest::Response>,
        with_status: bool,
    ) -> RequestOutcome {
        match response {
            Ok(response) => {
                if response.status().is_success() {
                    Ok(())
                } else {
                    let status = response.status();
                    let error_text = response.text().await.unwrap_or_default();
                    Err(RequestFailure::new(failure_text(status, &error_text, with_status)))
                }
            }
            Err(e) => Err(RequestFailure::new(e.to_string())),
        }
    }
}

#[async_trait]
impl Orchestrator for HttpOrchestrator {
    async fn control(&self, action: Action, target: &TaskTarget) -> RequestOutcome {
        let url = self.control_url(action, target);
        tracing::debug!("GET {}", url);
        Self::outcome(self.client.get(&url).send().await, false).await
    }

    async fn deploy_agent(&self, request: &AgentDeployRequest) -> RequestOutcome {
        let url = format!("{}/deploy-agent", self.endpoint_base);
        tracing::debug!("POST {} host={}", url, request.host);
        Self::outcome(self.client.post(&url).json(request).send().await, true).await
    }
}

fn failure_text(status: reqwest::StatusCode, body: &str, with_status: bool) -> String {
    if body.is_empty() {
        status.to_string()
    } else if with_status {
        format!("{}, {}", status, body)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_url() {
        let client = HttpOrchestrator::new("http://127.0.0.1:8001/api/");
        let target = TaskTarget {
            project: "hbase".to_string(),
            cluster: "hbase-test".to_string(),
            job: "master".to_string(),
            task_id: 0,
        };
        assert_eq!(client.endpoint_base(), "http://127.0.0.1:8001/api");
        assert_eq!(
            client.control_url(Action::Cleanup, &target),
            "http://127.0.0.1:8001/api/cleanup/hbase/hbase-test/master/0"
        );
    }

    #[test]
    fn test_failure_text() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(failure_text(status, "Task does not found", false), "Task does not found");
        assert_eq!(
            failure_text(status, "Failed to dial", true),
            "400 Bad Request, Failed to dial"
        );
        assert_eq!(failure_text(status, "", false), "400 Bad Request");
        assert_eq!(failure_text(status, "", true), "400 Bad Request");
    }

    #[test]
    fn test_deploy_request_wire_names() {
        let request = AgentDeployRequest {
            ssh_user: "root".to_string(),
            ssh_private_key: String::new(),
            ssh_password: "secret".to_string(),
            huker_agent_root_dir: "/opt/huker".to_string(),
            host: "h1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sshUser"], "root");
        assert_eq!(json["sshPrivateKey"], "");
        assert_eq!(json["sshPassword"], "secret");
        assert_eq!(json["hukerAgentRootDir"], "/opt/huker");
        assert_eq!(json["host"], "h1");
    }
}
