//! Request handler: the entry point the per-service façades hang off.
//!
//! Owns the dispatcher and config. Every façade call is one of two shapes:
//! `fetch` (decode the reply into a typed value) or `execute` (status only).

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use sockrpc_core::destination::Destination;
use sockrpc_core::error::{Result, SockRpcError};
use sockrpc_core::protocol::{RequestMethod, Response, CONTENT_TYPE_JSON, CONTENT_TYPE_NONE};
use sockrpc_core::{decode_response, parse_response};

use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, Outbound};
use crate::obs::ClientMetrics;
use crate::transport::SockTransport;

/// Per-call timing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Reply timeout (ms); 0 = configured default.
    pub timeout_ms: u64,
    /// Delivery delay (ms); > 0 = fire-and-forget.
    pub delay_ms: u64,
}

impl CallOpts {
    pub fn now() -> Self {
        Self::default()
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            delay_ms: 0,
        }
    }

    pub fn delayed(delay_ms: u64) -> Self {
        Self {
            timeout_ms: 0,
            delay_ms,
        }
    }
}

/// One façade call: where it goes and how it is labelled.
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub dest: Destination,
    pub method: RequestMethod,
    pub uri: String,
    pub resource: &'static str,
}

impl Route {
    pub fn new(dest: impl Into<Destination>, method: RequestMethod, uri: impl Into<String>, resource: &'static str) -> Self {
        Self {
            dest: dest.into(),
            method,
            uri: uri.into(),
            resource,
        }
    }
}

#[derive(Clone)]
pub struct RequestHandler {
    inner: Arc<HandlerInner>,
}

struct HandlerInner {
    cfg: ClientConfig,
    dispatcher: Dispatcher,
}

impl RequestHandler {
    /// Build a handler over `transport`.
    pub fn new(cfg: ClientConfig, transport: Arc<dyn SockTransport>) -> Result<Self> {
        cfg.validate()?;

        let metrics = Arc::new(ClientMetrics::new(cfg.metrics.namespace.clone()));
        let dispatcher = Dispatcher::new(
            transport,
            cfg.client.publisher.clone(),
            cfg.client.default_timeout_ms,
            metrics,
        );

        tracing::info!(
            publisher = %cfg.client.publisher,
            default_timeout_ms = cfg.client.default_timeout_ms,
            "request handler ready"
        );

        Ok(Self {
            inner: Arc::new(HandlerInner { cfg, dispatcher }),
        })
    }

    pub fn cfg(&self) -> &ClientConfig {
        &self.inner.cfg
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }

    pub fn metrics(&self) -> Arc<ClientMetrics> {
        self.inner.dispatcher.metrics()
    }

    /// Send a prebuilt payload to any queue and hand back the raw reply.
    #[allow(clippy::too_many_arguments)]
    pub async fn send_request(
        &self,
        dest: &Destination,
        uri: &str,
        method: RequestMethod,
        timeout_ms: u64,
        delay_ms: u64,
        data_type: &str,
        data: Bytes,
    ) -> Result<Option<Response>> {
        self.inner
            .dispatcher
            .send(dest, uri, method, timeout_ms, delay_ms, data_type, data)
            .await
    }

    /// Call and decode the reply payload into `T`.
    pub(crate) async fn fetch<T>(&self, route: Route, opts: CallOpts, body: Option<Bytes>) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let res = self.exchange(route, opts, body).await?;
        decode_response(res.as_ref())
    }

    /// Call and check the reply status only.
    pub(crate) async fn execute(&self, route: Route, opts: CallOpts, body: Option<Bytes>) -> Result<()> {
        let res = self.exchange(route, opts, body).await?;
        parse_response::<()>(res.as_ref(), None)
    }

    async fn exchange(&self, route: Route, opts: CallOpts, body: Option<Bytes>) -> Result<Option<Response>> {
        let (data_type, data) = match body {
            Some(b) => (CONTENT_TYPE_JSON, b),
            None => (CONTENT_TYPE_NONE, Bytes::new()),
        };

        self.inner
            .dispatcher
            .send_request(
                &route.dest,
                Outbound {
                    uri: &route.uri,
                    method: route.method,
                    resource: route.resource,
                    timeout_ms: opts.timeout_ms,
                    delay_ms: opts.delay_ms,
                    data_type,
                    data,
                },
            )
            .await
    }

    /// Options for list/paging calls.
    pub(crate) fn list_opts(&self) -> CallOpts {
        CallOpts::timeout(self.inner.cfg.client.list_timeout_ms)
    }
}

/// Marshal a request body.
pub(crate) fn json<B: Serialize + ?Sized>(body: &B) -> Result<Option<Bytes>> {
    serde_json::to_vec(body)
        .map(|v| Some(Bytes::from(v)))
        .map_err(SockRpcError::Marshal)
}

/// `<base>?page_token=..&page_size=..` with the token URL-escaped.
pub(crate) fn page_uri(base: &str, page_token: &str, page_size: u64) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("page_token", page_token)
        .append_pair("page_size", &page_size.to_string())
        .finish();
    format!("{base}?{query}")
}

/// `<base>?<key>=<value>` with the value URL-escaped.
pub(crate) fn query_uri(base: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{base}?{query}")
}
