//! # Causeway Admin
//! The in-process embedding point for the admin UI: configuration from the
//! environment, a PostgreSQL pool, and the wired lifecycle services. There
//! is deliberately no binary, HTTP surface, or CLI here — the admin UI
//! links this crate and drives the services directly.
pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::{AdminConfig, Dependencies};
pub use errors::AdminError;
pub use telemetry::init_tracing;
