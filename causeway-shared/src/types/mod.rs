mod analysis;
mod application;
mod audit;
mod organization;
mod project;
mod result;
mod role;
mod target;

pub use analysis::{DeletionAnalysis, DeletionImpact, DependencyCounts, TargetSummary};
pub use application::ApplicationStatus;
pub use audit::NewAuditEntry;
pub use organization::{OrganizationModeration, OrganizationStatus, OrganizationStatusUpdate};
pub use project::{ProjectModeration, ProjectStatus, ProjectStatusUpdate};
pub use result::DeletionResult;
pub use role::Role;
pub use target::DeletionTarget;
