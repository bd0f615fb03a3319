use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Task inventory of one cluster, the input the board is rendered from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub project: String,
    pub cluster: String,
    #[serde(default)]
    pub jobs: Vec<JobInventory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInventory {
    pub name: String,
    #[serde(default)]
    pub hosts: Vec<HostInventory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInventory {
    pub task_id: u32,
    pub host: String,
}

impl Inventory {
    /// Inventory with no jobs, used when no inventory file is configured
    pub fn empty(project: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            cluster: cluster.into(),
            jobs: Vec::new(),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let inventory = Self::from_yaml(&content)?;
        tracing::info!(
            "Loaded inventory for {}/{} with {} jobs from {}",
            inventory.project,
            inventory.cluster,
            inventory.jobs.len(),
            path.display()
        );
        Ok(inventory)
    }

    pub fn task_count(&self) -> usize {
        self.jobs.iter().map(|j| j.hosts.len()).sum()
    }
}
