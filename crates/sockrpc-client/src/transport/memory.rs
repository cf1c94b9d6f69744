//! In-process transport.
//!
//! Queue consumers register a `QueueHandler` under their queue name. An
//! immediate publish runs the handler on its own task and awaits the reply
//! over a oneshot channel; a delayed publish sleeps on the runtime first and
//! drops the reply.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::oneshot;

use sockrpc_core::error::TransportError;
use sockrpc_core::protocol::{Request, Response};

use super::SockTransport;

/// Consumer side of one request queue.
#[async_trait]
pub trait QueueHandler: Send + Sync {
    async fn handle(&self, req: Request) -> Response;
}

#[derive(Default)]
struct BrokerStats {
    published: AtomicU64,
    scheduled: AtomicU64,
    delivered_delayed: AtomicU64,
}

/// Registry of queue consumers plus publish counters.
#[derive(Default)]
pub struct MemoryBroker {
    queues: DashMap<String, Arc<dyn QueueHandler>>,
    stats: Arc<BrokerStats>,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self {
            queues: DashMap::new(),
            stats: Arc::new(BrokerStats::default()),
        }
    }

    /// Register (or replace) the consumer of `queue`.
    pub fn bind(&self, queue: impl Into<String>, handler: Arc<dyn QueueHandler>) {
        self.queues.insert(queue.into(), handler);
    }

    pub fn unbind(&self, queue: &str) -> bool {
        self.queues.remove(queue).is_some()
    }

    pub fn bound_queues(&self) -> Vec<String> {
        self.queues.iter().map(|e| e.key().clone()).collect()
    }

    /// Immediate publishes accepted so far.
    pub fn published(&self) -> u64 {
        self.stats.published.load(Ordering::Relaxed)
    }

    /// Delayed publishes accepted so far.
    pub fn scheduled(&self) -> u64 {
        self.stats.scheduled.load(Ordering::Relaxed)
    }

    /// Delayed publishes that reached their consumer.
    pub fn delivered_delayed(&self) -> u64 {
        self.stats.delivered_delayed.load(Ordering::Relaxed)
    }

    fn handler(&self, queue: &str) -> Result<Arc<dyn QueueHandler>, TransportError> {
        self.queues
            .get(queue)
            .map(|h| h.value().clone())
            .ok_or_else(|| TransportError::Unreachable(queue.to_string()))
    }
}

#[async_trait]
impl SockTransport for MemoryBroker {
    async fn request_publish(&self, queue: &str, req: &Request) -> Result<Response, TransportError> {
        let handler = self.handler(queue)?;
        self.stats.published.fetch_add(1, Ordering::Relaxed);

        let (tx, rx) = oneshot::channel();
        let req = req.clone();
        tokio::spawn(async move {
            let res = handler.handle(req).await;
            // receiver gone means the caller timed out
            let _ = tx.send(res);
        });

        rx.await.map_err(|_| TransportError::ReplyDropped)
    }

    async fn request_publish_with_delay(
        &self,
        queue: &str,
        req: &Request,
        delay_ms: u64,
    ) -> Result<(), TransportError> {
        let handler = self.handler(queue)?;
        self.stats.scheduled.fetch_add(1, Ordering::Relaxed);

        let req = req.clone();
        let stats = Arc::clone(&self.stats);
        let queue = queue.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            let res = handler.handle(req).await;
            stats.delivered_delayed.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(%queue, status = res.status_code, "delayed request delivered");
        });

        Ok(())
    }
}
