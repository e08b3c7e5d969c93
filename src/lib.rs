//! Helpers for a wallet dashboard: RPC client factory, currency conversion,
//! block explorer links and a transaction parse cache.

pub mod chain;
pub mod config;
pub mod currency;
pub mod error;
pub mod explorer;
pub mod factory;
pub mod observability;
pub mod rpc;
pub mod txn;

pub use chain::{Chain, Network};
pub use config::PanelConfig;
pub use currency::CurrencyConverter;
pub use error::ValidationError;
pub use explorer::BlockExplorerResolver;
pub use factory::ClientFactory;
pub use txn::TransactionParseCache;
