use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;

use sockrpc_core::destination::Destination;
use sockrpc_core::error::{Result, SockRpcError};
use sockrpc_core::protocol::{Request, RequestMethod, Response};

use crate::obs::metrics::GaugeVec;
use crate::obs::ClientMetrics;
use crate::transport::SockTransport;

/// Call parameters for one send.
#[derive(Debug, Clone)]
pub struct Outbound<'a> {
    pub uri: &'a str,
    pub method: RequestMethod,
    /// Resource label for metrics, e.g. `call/calls/<call-id>/talk`.
    pub resource: &'a str,
    /// Reply timeout (ms); 0 selects the dispatcher default.
    pub timeout_ms: u64,
    /// Delivery delay (ms); > 0 turns the send into fire-and-forget.
    pub delay_ms: u64,
    pub data_type: &'a str,
    pub data: Bytes,
}

/// Builds request envelopes and hands them to the transport.
///
/// Either a reply comes back (immediate path) or nothing does (delayed path).
/// Failure status codes are not errors here; the reply is returned as-is.
pub struct Dispatcher {
    transport: Arc<dyn SockTransport>,
    publisher: String,
    default_timeout_ms: u64,
    metrics: Arc<ClientMetrics>,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn SockTransport>,
        publisher: impl Into<String>,
        default_timeout_ms: u64,
        metrics: Arc<ClientMetrics>,
    ) -> Self {
        Self {
            transport,
            publisher: publisher.into(),
            default_timeout_ms,
            metrics,
        }
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn metrics(&self) -> Arc<ClientMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Send to an arbitrary queue without a resource label.
    #[allow(clippy::too_many_arguments)]
    pub async fn send(
        &self,
        dest: &Destination,
        uri: &str,
        method: RequestMethod,
        timeout_ms: u64,
        delay_ms: u64,
        data_type: &str,
        data: Bytes,
    ) -> Result<Option<Response>> {
        self.send_request(
            dest,
            Outbound {
                uri,
                method,
                resource: "",
                timeout_ms,
                delay_ms,
                data_type,
                data,
            },
        )
        .await
    }

    pub async fn send_request(&self, dest: &Destination, out: Outbound<'_>) -> Result<Option<Response>> {
        let req = Request {
            uri: out.uri.to_string(),
            method: out.method,
            publisher: self.publisher.clone(),
            data_type: out.data_type.to_string(),
            data: out.data,
        };

        if out.delay_ms > 0 {
            // scheduled; no reply is expected
            self.send_delayed(dest, out.resource, out.delay_ms, &req).await?;
            return Ok(None);
        }

        let timeout_ms = if out.timeout_ms == 0 {
            self.default_timeout_ms
        } else {
            out.timeout_ms
        };
        self.send_direct(dest, out.resource, timeout_ms, &req)
            .await
            .map(Some)
    }

    async fn send_direct(
        &self,
        dest: &Destination,
        resource: &str,
        timeout_ms: u64,
        req: &Request,
    ) -> Result<Response> {
        let target = dest.as_str();
        tracing::debug!(queue = %target, method = %req.method, uri = %req.uri, timeout_ms, "sending request");

        let guard = InFlight::enter(&self.metrics.requests_in_flight, target);
        let start = Instant::now();
        let res = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.transport.request_publish(target, req),
        )
        .await;
        let elapsed = start.elapsed();
        drop(guard);
        self.metrics.request_process_time.observe(
            &[("target", target), ("resource", resource), ("method", req.method.as_str())],
            elapsed,
        );

        let err = match res {
            Ok(Ok(res)) => {
                tracing::debug!(queue = %target, uri = %req.uri, status = res.status_code, ?elapsed, "received response");
                return Ok(res);
            }
            Ok(Err(source)) => SockRpcError::Transport {
                queue: target.to_string(),
                method: req.method,
                uri: req.uri.clone(),
                source,
            },
            Err(_) => SockRpcError::Timeout {
                queue: target.to_string(),
                method: req.method,
                uri: req.uri.clone(),
                timeout_ms,
            },
        };

        tracing::warn!(queue = %target, method = %req.method, uri = %req.uri, error = %err, "request failed");
        self.metrics
            .request_failures
            .inc(&[("target", target), ("kind", err.kind().as_str())]);
        Err(err)
    }

    async fn send_delayed(&self, dest: &Destination, resource: &str, delay_ms: u64, req: &Request) -> Result<()> {
        let target = dest.as_str();
        tracing::debug!(queue = %target, method = %req.method, uri = %req.uri, delay_ms, "scheduling delayed request");

        let start = Instant::now();
        let res = self
            .transport
            .request_publish_with_delay(target, req, delay_ms)
            .await;
        self.metrics.request_process_time.observe(
            &[("target", Destination::DELAY), ("resource", resource), ("method", req.method.as_str())],
            start.elapsed(),
        );

        res.map_err(|source| {
            let err = SockRpcError::Schedule {
                queue: target.to_string(),
                method: req.method,
                uri: req.uri.clone(),
                source,
            };
            tracing::warn!(queue = %target, uri = %req.uri, error = %err, "delayed request not scheduled");
            self.metrics
                .request_failures
                .inc(&[("target", target), ("kind", err.kind().as_str())]);
            err
        })
    }
}

/// Keeps the in-flight gauge balanced even if the send future is dropped.
struct InFlight<'a> {
    gauge: &'a GaugeVec,
    target: &'a str,
}

impl<'a> InFlight<'a> {
    fn enter(gauge: &'a GaugeVec, target: &'a str) -> Self {
        gauge.inc(&[("target", target)]);
        Self { gauge, target }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gauge.dec(&[("target", self.target)]);
    }
}
