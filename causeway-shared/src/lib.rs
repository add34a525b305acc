//! # Causeway Shared
//! This crate defines the domain types shared across the admin lifecycle
//! core: account roles, moderation statuses, deletion analysis reports,
//! audit entries, and deletion results.
pub mod types;
