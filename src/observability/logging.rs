//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Choose JSON or human output
//! - Honour `RUST_LOG`, falling back to the configured level

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("panel_utils={0},panel_cli={0}", config.log_level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(config.json_logs.then(|| fmt::layer().json()))
        .with((!config.json_logs).then(fmt::layer))
        .try_init()
}
