// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Events are filtered through `RUST_LOG`; without it only `info` and above
//! are printed.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Builds the filter used by [`init`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("global tracing subscriber already installed");
    }
}
