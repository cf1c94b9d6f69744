//! Transport boundary.
//!
//! The dispatcher only needs two primitives from whatever carries the
//! envelopes: publish-and-await-reply, and publish-later. Reply correlation,
//! delivery guarantees, and the scheduler belong to the implementation.

pub mod memory;

use async_trait::async_trait;

use sockrpc_core::error::TransportError;
use sockrpc_core::protocol::{Request, Response};

pub use memory::{MemoryBroker, QueueHandler};

#[async_trait]
pub trait SockTransport: Send + Sync {
    /// Publish `req` to `queue` and wait for the correlated reply.
    ///
    /// Callers bound the wait; implementations must tolerate the returned
    /// future being dropped mid-flight.
    async fn request_publish(&self, queue: &str, req: &Request) -> Result<Response, TransportError>;

    /// Hand `req` to the scheduler for delivery to `queue` after `delay_ms`.
    /// No reply is ever returned.
    async fn request_publish_with_delay(
        &self,
        queue: &str,
        req: &Request,
        delay_ms: u64,
    ) -> Result<(), TransportError>;
}
