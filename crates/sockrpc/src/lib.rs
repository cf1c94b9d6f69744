//! Top-level facade crate for sockrpc.
//!
//! Re-exports the wire/core types and the client library so users can depend on a single crate.

pub mod core {
    pub use sockrpc_core::*;
}

pub mod client {
    pub use sockrpc_client::*;
}
