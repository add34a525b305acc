//! PostgreSQL implementations of the admin lifecycle repositories.
mod accounts_repository;
mod applications_repository;
mod audit_repository;
mod impact_repository;
mod projects_repository;

pub use accounts_repository::PostgresAccountsRepository;
pub use applications_repository::PostgresApplicationsRepository;
pub use audit_repository::PostgresAuditRepository;
pub use impact_repository::PostgresImpactRepository;
pub use projects_repository::PostgresProjectsRepository;
