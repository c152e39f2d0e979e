// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the result table.
pub fn init(verbose: bool) {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
