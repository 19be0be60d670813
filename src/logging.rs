use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, one line per event; `RUST_LOG` overrides `info`.
/// Colour only when stderr is a terminal, so redirected logs stay plain.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
