//! Diagnostic logging to stderr via `tracing`.
//!
//! Level precedence: `-v` on the command line, then `OPEN_ASSETS_LOG`
//! (any `EnvFilter` directive), then `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "OPEN_ASSETS_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Build the filter for the given verbosity.
#[must_use]
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("open_assets=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    Registry::default()
        .with(build_env_filter(verbose))
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
