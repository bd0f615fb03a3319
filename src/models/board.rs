//! Task board view state.
//!
//! The board is the console's model of the cluster detail table: one row per
//! task with a checkbox and a status column, plus the header select-all
//! control. Rows are addressed by their position; every re-render bumps the
//! generation so late completions cannot patch a row of a newer board.

use serde::Serialize;

use super::action::Action;
use super::inventory::Inventory;
use super::status::StatusLabel;
use crate::error::{AppError, Result};

/// Address of one task on the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskTarget {
    pub project: String,
    pub cluster: String,
    pub job: String,
    pub task_id: u32,
}

impl TaskTarget {
    /// Orchestrator path for an action, relative to the endpoint base
    pub fn path(&self, action: Action) -> String {
        format!(
            "/{}/{}/{}/{}/{}",
            action.as_str(),
            urlencoding::encode(&self.project),
            urlencoding::encode(&self.cluster),
            urlencoding::encode(&self.job),
            self.task_id
        )
    }
}

impl std::fmt::Display for TaskTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}.{}",
            self.project, self.cluster, self.job, self.task_id
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    pub job: String,
    pub task_id: u32,
    pub host: String,
    pub checked: bool,
    pub status: StatusLabel,
}

/// A checked row captured at dispatch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRow {
    pub index: usize,
    pub generation: u64,
    pub target: TaskTarget,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskBoard {
    pub project: String,
    pub cluster: String,
    pub generation: u64,
    /// Header select-all control; never part of a selection
    pub select_all: bool,
    pub rows: Vec<TaskRow>,
}

impl TaskBoard {
    pub fn from_inventory(inventory: Inventory) -> Self {
        let mut board = Self {
            project: String::new(),
            cluster: String::new(),
            generation: 0,
            select_all: false,
            rows: Vec::new(),
        };
        board.render(inventory);
        board
    }

    /// Replace all rows from an inventory, resetting checkboxes and labels
    pub fn render(&mut self, inventory: Inventory) {
        let mut rows = Vec::with_capacity(inventory.task_count());
        for job in inventory.jobs {
            let mut hosts = job.hosts;
            hosts.sort_by_key(|h| h.task_id);
            for host in hosts {
                rows.push(TaskRow {
                    job: job.name.clone(),
                    task_id: host.task_id,
                    host: host.host,
                    checked: false,
                    status: StatusLabel::not_bootstrapped(),
                });
            }
        }

        self.project = inventory.project;
        self.cluster = inventory.cluster;
        self.generation += 1;
        self.select_all = false;
        self.rows = rows;
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| AppError::NotFound(format!("Row {} not found", index)))?;
        row.checked = checked;
        Ok(())
    }

    /// Set every row to the select-all state, optionally only rows of one job
    pub fn toggle_all(&mut self, checked: bool, job: Option<&str>) {
        if job.is_none() {
            self.select_all = checked;
        }
        for row in self.rows.iter_mut() {
            if job.map_or(true, |j| row.job == j) {
                row.checked = checked;
            }
        }
    }

    /// Checked task rows in document order
    pub fn collect_selection(&self) -> Vec<SelectedRow> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.checked)
            .map(|(index, row)| SelectedRow {
                index,
                generation: self.generation,
                target: TaskTarget {
                    project: self.project.clone(),
                    cluster: self.cluster.clone(),
                    job: row.job.clone(),
                    task_id: row.task_id,
                },
            })
            .collect()
    }

    /// Write a label into a row's status column.
    ///
    /// Returns false when the row belongs to an older generation or no longer
    /// exists, in which case nothing is written.
    pub fn apply(&mut self, index: usize, generation: u64, label: StatusLabel) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.rows.get_mut(index) {
            Some(row) => {
                row.status = label;
                true
            }
            None => false,
        }
    }
}
