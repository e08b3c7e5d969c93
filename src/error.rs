//! Crate-wide validation error.

use thiserror::Error;

/// A configuration or argument check failed.
///
/// Raised synchronously at configuration or call time, never deferred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// Create a validation error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The human-readable reason.
    pub fn message(&self) -> &str {
        &self.0
    }
}
