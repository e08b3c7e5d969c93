//! RPC client factory for dashboard-hosted backends.
//!
//! # Data Flow
//! ```text
//! FactoryOptions (id, chain, base path, connection, injected clients)
//!     → options.rs (validation, capability checks)
//!     → client_factory.rs (identity + lazily built node/wallet/multisig)
//!     → rpc clients at {base_path}/{id}/{kind}
//! ```
//!
//! # Design Decisions
//! - The factory owns its clients; there are no process-wide singletons
//! - Injected clients are accepted by capability, not concrete type
//! - Changing identity rebuilds every client; in-flight requests are not migrated

pub mod client_factory;
pub mod options;

pub use client_factory::ClientFactory;
pub use options::{ClientIdentity, ClientSet, FactoryOptions, DEFAULT_BASE_PATH};
