//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Output goes to stderr so generated keys on stdout stay clean.
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_tracing`] when that may be the case.
///
/// # Example
///
/// ```rust,no_run
/// use unique_key::init_tracing;
///
/// // Debug logging for key generation, warnings for everything else
/// init_tracing("unique_key=debug,warn");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `unique_key=debug` - Enable debug level for this crate
/// - `unique_key::key=trace` - Trace level for a specific module
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(default_filter))
        .init();
}

/// Like [`init_tracing`], but returns `false` instead of panicking when a
/// subscriber is already installed.
pub fn try_init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(default_filter))
        .try_init()
        .is_ok()
}
