use tracing_subscriber::{fmt, EnvFilter};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// Intended for binaries and examples; libraries should leave subscriber
/// installation to the application. Safe to call more than once, later calls
/// are no-ops.
pub fn init_tracing() {
    let _ = dotenvy::dotenv();
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
