pub mod action;
pub mod board;
pub mod inventory;
pub mod status;

pub use action::{Action, ActionLabels};
pub use board::{SelectedRow, TaskBoard, TaskRow, TaskTarget};
pub use inventory::{HostInventory, Inventory, JobInventory};
pub use status::{LabelTone, Phase, StatusLabel, NOT_BOOTSTRAP};
