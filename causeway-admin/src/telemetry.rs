//! Tracing initialization for hosts embedding the admin core.
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing for the process.
///
/// Honors `RUST_LOG`; defaults to info-level output for the causeway
/// crates. Set `LOG_JSON=1` for JSON-formatted structured output, which is
/// what hosted log collection expects.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("causeway_admin=info,causeway_moderation=info,causeway_repository=info")
    });

    let json_output = std::env::var("LOG_JSON").is_ok_and(|v| v == "1");

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "causeway-admin",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );
}
