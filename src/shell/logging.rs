use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber; call once at startup.
/// `RUST_LOG` wins when set; otherwise info for this crate and request traces.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
