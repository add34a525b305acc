mod analyzer;
mod authorize;
mod executor;
mod moderation;
mod status;
mod wizard;

pub use analyzer::AnalysisError;
pub use authorize::AuthorizationError;
pub use executor::ExecutionError;
pub use moderation::ModerationError;
pub use status::TransitionError;
pub use wizard::WizardError;
