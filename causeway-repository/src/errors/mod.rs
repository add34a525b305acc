//! Error types for the admin lifecycle repositories.
//! Consolidates and re-exports error types related to data-layer operations.
mod accounts;
mod applications;
mod audit;
mod impact;
mod projects;

pub use accounts::AccountsRepositoryError;
pub use applications::ApplicationsRepositoryError;
pub use audit::AuditRepositoryError;
pub use impact::ImpactRepositoryError;
pub use projects::ProjectsRepositoryError;
