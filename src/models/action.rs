use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UserWarning;

/// Lifecycle actions an operator can fire at a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Bootstrap,
    Start,
    Stop,
    Restart,
    RollingUpdate,
    Cleanup,
}

/// Label texts shown in a row's status column for one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLabels {
    pub pending: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

impl Action {
    /// Path segment used by the orchestrator API
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Bootstrap => "bootstrap",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::RollingUpdate => "rolling_update",
            Action::Cleanup => "cleanup",
        }
    }

    pub fn labels(&self) -> ActionLabels {
        match self {
            Action::Bootstrap => ActionLabels {
                pending: "Bootstrapping",
                success: "Running",
                failure: "Bootstrap failed",
            },
            Action::Start => ActionLabels {
                pending: "Starting",
                success: "Running",
                failure: "Start failed",
            },
            Action::Stop => ActionLabels {
                pending: "Stopping",
                success: "Stopped",
                failure: "Stop failed",
            },
            Action::Restart => ActionLabels {
                pending: "Restarting",
                success: "Running",
                failure: "Restart failed",
            },
            Action::RollingUpdate => ActionLabels {
                pending: "RollingUpdating",
                success: "Running",
                failure: "RollingUpdate failed",
            },
            // Cleanup returns the task to the not-bootstrapped state
            Action::Cleanup => ActionLabels {
                pending: "Cleanuping",
                success: super::status::NOT_BOOTSTRAP,
                failure: "Cleanup failed",
            },
        }
    }

    pub fn all() -> Vec<Action> {
        vec![
            Action::Bootstrap,
            Action::Start,
            Action::Stop,
            Action::Restart,
            Action::RollingUpdate,
            Action::Cleanup,
        ]
    }
}

impl FromStr for Action {
    type Err = UserWarning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bootstrap" => Ok(Action::Bootstrap),
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            "restart" => Ok(Action::Restart),
            "rolling_update" => Ok(Action::RollingUpdate),
            "cleanup" => Ok(Action::Cleanup),
            other => Err(UserWarning::UnknownAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
