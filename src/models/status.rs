use serde::Serialize;

use super::action::Action;
use crate::services::orchestrator::RequestOutcome;

/// Label a row shows before any action has run on it
pub const NOT_BOOTSTRAP: &str = "NotBootstrap";

/// Visual tone of a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelTone {
    Default,
    Warning,
    Success,
    Danger,
}

/// What is rendered in a row's status column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    pub tone: LabelTone,
    pub text: String,
    /// Raw error payload reported by the orchestrator, only set on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Where an action is in its lifecycle for one row
#[derive(Debug, Clone, Copy)]
pub enum Phase<'a> {
    Pending,
    Done(&'a RequestOutcome),
}

impl StatusLabel {
    pub fn not_bootstrapped() -> Self {
        Self {
            tone: LabelTone::Default,
            text: NOT_BOOTSTRAP.to_string(),
            detail: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.detail.is_some()
    }

    /// Map an action and its phase to the label shown for the row
    pub fn render(action: Action, phase: Phase<'_>) -> Self {
        let labels = action.labels();
        match phase {
            Phase::Pending => Self {
                tone: LabelTone::Warning,
                text: labels.pending.to_string(),
                detail: None,
            },
            Phase::Done(Ok(())) => match action {
                Action::Cleanup => Self::not_bootstrapped(),
                Action::Stop => Self {
                    tone: LabelTone::Danger,
                    text: labels.success.to_string(),
                    detail: None,
                },
                _ => Self {
                    tone: LabelTone::Success,
                    text: labels.success.to_string(),
                    detail: None,
                },
            },
            Phase::Done(Err(failure)) => Self {
                tone: LabelTone::Danger,
                text: labels.failure.to_string(),
                detail: Some(failure.message.clone()),
            },
        }
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::not_bootstrapped()
    }
}
