//! Tracing initialization for the CLI.
//!
//! Library code only emits events; the binary decides where they go.

/// Initialize tracing on stderr.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn` so that blocked
/// submissions are visible without drowning stdout output.
pub fn init_cli_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}
