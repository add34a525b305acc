//! # Causeway Repository
//! This crate provides traits and implementations for the admin lifecycle
//! data layer. It includes definitions for errors, interfaces, and concrete
//! implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;
pub mod types;

pub use errors::{
    AccountsRepositoryError, ApplicationsRepositoryError, AuditRepositoryError,
    ImpactRepositoryError, ProjectsRepositoryError,
};
pub use interfaces::{
    AccountsRepository, ApplicationsRepository, AuditRepository, ImpactRepository,
    ProjectsRepository,
};
pub use postgres::{
    PostgresAccountsRepository, PostgresApplicationsRepository, PostgresAuditRepository,
    PostgresImpactRepository, PostgresProjectsRepository,
};
pub use types::RawDeletionImpact;
