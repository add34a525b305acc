//! This module defines and re-exports the interfaces for the admin lifecycle
//! data layer. It serves as a central point for accessing traits related to
//! data interaction.
mod accounts;
mod applications;
mod audit;
mod impact;
mod projects;

pub use accounts::AccountsRepository;
pub use applications::ApplicationsRepository;
pub use audit::AuditRepository;
pub use impact::ImpactRepository;
pub use projects::ProjectsRepository;
