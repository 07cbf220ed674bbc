//! tracing subscriber setup. Logs go to stderr; stdout carries only help
//! text and listings.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Zero falls back to the configured one.
pub fn filter_directive(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// RUST_LOG wins over both `-v` and the config file.
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
