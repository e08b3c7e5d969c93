//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PanelConfig (validated, immutable)
//!     → FactoryOptions / BlockExplorerResolver / TransactionParseCache
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Connection defaults can be derived from a dashboard origin URL

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_str, ConfigError};
pub use schema::{ClientConfig, ConnectionConfig, ExplorerConfig, ObservabilityConfig, PanelConfig};
pub use validation::validate_config;
