//! sockrpc core: transport-agnostic request/response envelopes, status-code
//! mapping, response parsing, and queue addressing.
//!
//! This crate defines the wire-level contracts and error surface shared by the
//! client dispatcher, the per-service façades, and any transport that carries
//! the envelopes. It intentionally carries no transport or runtime
//! dependencies so it can be reused by both sides of a queue.
//!
//! # Panic-free
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `SockRpcError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod destination;
pub mod error;
pub mod parse;
pub mod protocol;
pub mod status;

pub use destination::{Destination, Service};
/// Shared result type.
pub use error::{Result, SockRpcError, TransportError};
pub use parse::{decode_response, parse_response};
pub use protocol::{Request, RequestMethod, Response};
pub use status::{error_for, StatusError};
