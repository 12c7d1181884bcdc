//! Tracing subscriber construction
//!
//! Library code only emits `tracing` events. The subscriber is built here from
//! [`Config`] and installed by the binary; tests can install it scoped with
//! [`tracing::dispatcher::with_default`].

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, LogFormat},
    error::{Error, Result},
};

/// Build the subscriber described by the configuration
///
/// `RUST_LOG` takes precedence over `service.log_level` when set.
pub fn build_subscriber(config: &Config) -> Dispatch {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.service.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.service.log_format {
        LogFormat::Json => Dispatch::new(
            builder
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .finish(),
        ),
        LogFormat::Pretty => Dispatch::new(builder.pretty().finish()),
    }
}

/// Install the configured subscriber as the process-wide default
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing::dispatcher::set_global_default(build_subscriber(config))
        .map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(
        format = %config.service.log_format,
        level = %config.service.log_level,
        "Tracing initialized for service: {}",
        config.service.name
    );

    Ok(())
}
