//! Error types for the deletion confirmation wizard.
use thiserror::Error;

/// Represents a rejected wizard event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("event '{event}' is not valid in state '{state}'")]
    InvalidEvent {
        state: &'static str,
        event: &'static str,
    },

    #[error("a deletion reason is required")]
    BlankReason,
}
