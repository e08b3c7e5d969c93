//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check chain, protocol and network names
//! - Validate value ranges and formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PanelConfig → Result<(), Vec<ValidationError>>

use crate::chain::Chain;
use crate::config::schema::PanelConfig;
use crate::error::ValidationError;
use crate::explorer::BlockExplorerResolver;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &PanelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.connection.host.is_empty() {
        errors.push(ValidationError::new("connection.host must not be empty"));
    }
    if config.connection.port == 0 {
        errors.push(ValidationError::new("connection.port must be non-zero"));
    }

    if let Err(e) = config.client.chain.parse::<Chain>() {
        errors.push(e);
    }
    if matches!(config.client.id.as_deref(), Some("")) {
        errors.push(ValidationError::new("client.id must not be empty when set"));
    }
    if !config.client.base_path.starts_with('/') {
        errors.push(ValidationError::new(format!(
            "client.base_path must start with '/', got '{}'",
            config.client.base_path
        )));
    }

    if let Err(e) = BlockExplorerResolver::new(&config.explorer.protocol, &config.explorer.network)
    {
        errors.push(e);
    }

    if let Err(e) = config.transactions.validate() {
        errors.push(e);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(format!(
            "observability.log_level must be one of {}, got '{}'",
            LOG_LEVELS.join(", "),
            config.observability.log_level
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
