//! # Causeway Moderation
//! This crate defines the admin lifecycle services: the moderation state
//! machines for organizations, projects, and account roles, the deletion
//! impact analyzer, the safe deletion executor, the authorization gate,
//! and the deletion confirmation wizard.
pub mod analyzer;
pub mod authorize;
pub mod executor;
pub mod moderation;
pub mod status;
pub mod wizard;

pub mod errors;

#[cfg(test)]
pub(crate) mod testing;

pub use analyzer::DeletionAnalyzer;
pub use authorize::{AdminGate, GateConfig};
pub use errors::{
    AnalysisError, AuthorizationError, ExecutionError, ModerationError, TransitionError,
    WizardError,
};
pub use executor::DeletionExecutor;
pub use moderation::{ModerationEvent, ModerationService, Notifier, TracingNotifier};
pub use wizard::{DeletionWizard, WizardState};
