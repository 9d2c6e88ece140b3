//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for the requested verbosity
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber; call once per process
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_for(verbose))
        .init();
}
