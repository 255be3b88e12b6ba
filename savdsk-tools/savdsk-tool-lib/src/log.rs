use tracing_subscriber::EnvFilter;

/// Install the diagnostic logger. Set `RUST_LOG` to one of `trace`, `debug`, `info`,
/// `warn` or `error`; warnings and errors are shown by default. Diagnostics go to
/// stderr so they never mix with the progress output.
pub fn init() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::new("warn"),
    };

    // Already installed if this is the second call.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        // The target is mostly just noise.
        .with_target(false)
        .without_time()
        .try_init();
}
