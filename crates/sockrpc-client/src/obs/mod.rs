//! Observability: in-process metrics and tracing setup.
//!
//! Metrics are stored as atomics, injected into the dispatcher, and rendered
//! by the `/metrics` ops handler.

pub mod logging;
pub mod metrics;

pub use metrics::ClientMetrics;
