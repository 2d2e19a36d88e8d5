use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honoring `RUST_LOG`. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
