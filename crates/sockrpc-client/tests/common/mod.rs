//! Test doubles shared by the client integration tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sockrpc_client::config::ClientConfig;
use sockrpc_client::{RequestHandler, SockTransport};
use sockrpc_core::error::TransportError;
use sockrpc_core::protocol::{Request, Response};

/// One publish seen by the recording transport.
#[derive(Debug, Clone)]
pub struct Published {
    pub queue: String,
    pub req: Request,
    /// `Some` for delayed publishes.
    pub delay_ms: Option<u64>,
}

/// What the recording transport does with an immediate publish.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(Response),
    Fail,
    /// Never answer.
    Hang,
}

/// Transport that records every publish and answers with a scripted reply.
pub struct RecordingTransport {
    published: Mutex<Vec<Published>>,
    reply: Mutex<Reply>,
    fail_schedule: bool,
}

impl RecordingTransport {
    pub fn replying(res: Response) -> Arc<Self> {
        Arc::new(Self {
            published: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Respond(res)),
            fail_schedule: false,
        })
    }

    pub fn with(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            published: Mutex::new(Vec::new()),
            reply: Mutex::new(reply),
            fail_schedule: false,
        })
    }

    pub fn failing_schedule() -> Arc<Self> {
        Arc::new(Self {
            published: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Fail),
            fail_schedule: true,
        })
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn published(&self) -> Vec<Published> {
        self.published.lock().unwrap().clone()
    }

    /// The single publish made so far.
    pub fn only(&self) -> Published {
        let all = self.published();
        assert_eq!(all.len(), 1, "expected exactly one publish, got {all:?}");
        all[0].clone()
    }
}

#[async_trait]
impl SockTransport for RecordingTransport {
    async fn request_publish(&self, queue: &str, req: &Request) -> Result<Response, TransportError> {
        self.published.lock().unwrap().push(Published {
            queue: queue.to_string(),
            req: req.clone(),
            delay_ms: None,
        });

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            Reply::Respond(res) => Ok(res),
            Reply::Fail => Err(TransportError::Publish("broker closed".into())),
            Reply::Hang => std::future::pending().await,
        }
    }

    async fn request_publish_with_delay(
        &self,
        queue: &str,
        req: &Request,
        delay_ms: u64,
    ) -> Result<(), TransportError> {
        self.published.lock().unwrap().push(Published {
            queue: queue.to_string(),
            req: req.clone(),
            delay_ms: Some(delay_ms),
        });

        if self.fail_schedule {
            return Err(TransportError::Publish("scheduler down".into()));
        }
        Ok(())
    }
}

pub fn handler(transport: Arc<RecordingTransport>) -> RequestHandler {
    RequestHandler::new(ClientConfig::for_publisher("test-manager"), transport).unwrap()
}

/// Decoded JSON body of a recorded request.
pub fn body(p: &Published) -> serde_json::Value {
    serde_json::from_slice(&p.req.data).unwrap()
}
