use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Defaults to `info`, overridable via
/// `RUST_LOG`. Logs go to stderr so report output on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
