//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events. Applications embedding stowage
//! call [`init`] (or install their own subscriber) to see them.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::config::Config;
use crate::core::constants::LOG_ENV;

/// Build the filter used by [`init`].
///
/// Resolution order: the `STOWAGE_LOG` environment variable, then the
/// configured `[log] filter`, then `stowage=debug` when verbose or
/// `stowage=warn` otherwise.
pub fn filter(verbose: bool, config: Option<&Config>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        match config.and_then(|c| c.log.filter.as_deref()) {
            Some(directive) => EnvFilter::new(directive),
            None if verbose => EnvFilter::new("stowage=debug"),
            None => EnvFilter::new("stowage=warn"),
        }
    })
}

/// Install a global fmt subscriber.
///
/// Returns an error instead of panicking if a global subscriber is already
/// set.
pub fn init(
    verbose: bool,
    config: Option<&Config>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter(verbose, config))
        .with(fmt::layer().with_target(false).without_time())
        .try_init()
}
