//! sockrpc client library entry.
//!
//! Wires the dispatcher, transport boundary, metrics, and config into a
//! `RequestHandler`, and hangs the per-service façades off it. Intended to be
//! embedded by the services that talk to each other over the request queues.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod models;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod transport;

pub use handler::{CallOpts, RequestHandler};
pub use transport::{MemoryBroker, QueueHandler, SockTransport};
