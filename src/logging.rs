//! Log setup for binaries built on this crate.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `HANGMAN_LOG=debug`.
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Initialize `tracing` with a filter taken from `HANGMAN_LOG`.
///
/// Defaults to `warn` if the variable is unset or invalid. Output goes to
/// stderr so it never interleaves with the board on stdout. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
