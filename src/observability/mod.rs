//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! factory, txn cache, rpc clients produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Library code only emits; the binary installs the subscriber
//! - Metrics go through the facade so embedding apps pick the exporter

pub mod logging;
pub mod metrics;
