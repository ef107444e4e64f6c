//! Tracing subscriber setup.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize telemetry. Respects `RUST_LOG`; defaults to debug for the
/// service crates and tower-http.
pub fn init_telemetry() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "pictor_api=debug,pictor_db=debug,pictor_storage=debug,tower_http=debug".into()
        }))
        .with(console_fmt)
        .init();
}
