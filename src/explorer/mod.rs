//! Block explorer permalinks.
//!
//! # Data Flow
//! ```text
//! (protocol, network)
//!     → catalog.rs (static explorer base URLs + resource suffixes)
//!     → resolver.rs (validated pair, builds url::Url links)
//! ```

pub mod catalog;
pub mod resolver;

use thiserror::Error;

use crate::error::ValidationError;

pub use catalog::{ExplorerEntry, Resource, PROTOCOLS};
pub use resolver::BlockExplorerResolver;

/// Errors raised while building explorer links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Concatenated link is not a valid URL.
    #[error("Invalid explorer link '{link}': {source}")]
    Url {
        link: String,
        #[source]
        source: url::ParseError,
    },
}
