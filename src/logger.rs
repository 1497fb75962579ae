use std::io;

use tracing::Dispatch;
use tracing_subscriber::{filter::Targets, prelude::*, util::TryInitError, Registry};

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr; stdout carries only the prompt and the result line.
/// Fails if a global subscriber is already set.
pub fn install(config: &Config) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(Targets::new().with_default(config.log_level));
    let dispatch = Dispatch::new(Registry::default().with(fmt_layer));
    dispatch.try_init()
}
