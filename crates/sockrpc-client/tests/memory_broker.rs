#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;
use uuid::Uuid;

use sockrpc_client::config::ClientConfig;
use sockrpc_client::{MemoryBroker, QueueHandler, RequestHandler, SockTransport};
use sockrpc_core::destination::Service;
use sockrpc_core::error::{ErrorKind, TransportError};
use sockrpc_core::protocol::{Request, RequestMethod, Response};
use sockrpc_core::StatusError;

/// Answers every request with its own uri, and reports it on a channel.
struct EchoQueue {
    seen: mpsc::UnboundedSender<Request>,
}

#[async_trait]
impl QueueHandler for EchoQueue {
    async fn handle(&self, req: Request) -> Response {
        let _ = self.seen.send(req.clone());
        Response::json(200, serde_json::json!({ "uri": req.uri }).to_string())
    }
}

/// Fake agent-manager: knows exactly one agent.
struct AgentQueue {
    known: Uuid,
}

#[async_trait]
impl QueueHandler for AgentQueue {
    async fn handle(&self, req: Request) -> Response {
        if req.uri == format!("/v1/agents/{}", self.known) && req.method == RequestMethod::Get {
            Response::json(200, serde_json::json!({ "id": self.known, "username": "alice" }).to_string())
        } else {
            Response::status(404)
        }
    }
}

fn echo() -> (Arc<EchoQueue>, mpsc::UnboundedReceiver<Request>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(EchoQueue { seen: tx }), rx)
}

fn request(uri: &str) -> Request {
    Request {
        uri: uri.into(),
        method: RequestMethod::Get,
        publisher: "test-manager".into(),
        data_type: String::new(),
        data: Bytes::new(),
    }
}

#[tokio::test]
async fn unknown_queue_is_unreachable() {
    let broker = MemoryBroker::new();

    let err = broker.request_publish("bin-manager.nobody.request", &request("/v1/x")).await.unwrap_err();
    assert!(matches!(err, TransportError::Unreachable(q) if q == "bin-manager.nobody.request"));

    let err = broker
        .request_publish_with_delay("bin-manager.nobody.request", &request("/v1/x"), 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Unreachable(_)));
    assert_eq!(broker.published(), 0);
    assert_eq!(broker.scheduled(), 0);
}

#[tokio::test]
async fn immediate_publish_awaits_consumer_reply() {
    let broker = MemoryBroker::new();
    let (queue, mut seen) = echo();
    broker.bind("bin-manager.call-manager.request", queue);

    let res = broker
        .request_publish("bin-manager.call-manager.request", &request("/v1/calls/c1"))
        .await
        .unwrap();

    assert_eq!(res.status_code, 200);
    assert_eq!(&res.data[..], br#"{"uri":"/v1/calls/c1"}"#);
    assert_eq!(seen.recv().await.unwrap().publisher, "test-manager");
    assert_eq!(broker.published(), 1);
}

#[tokio::test(start_paused = true)]
async fn delayed_publish_is_delivered_after_the_delay() {
    let broker = MemoryBroker::new();
    let (queue, mut seen) = echo();
    broker.bind("bin-manager.queue-manager.request", queue);
    let started = tokio::time::Instant::now();

    broker
        .request_publish_with_delay("bin-manager.queue-manager.request", &request("/v1/queues/q1/execute_run"), 1500)
        .await
        .unwrap();
    assert_eq!(broker.scheduled(), 1);
    assert_eq!(broker.delivered_delayed(), 0);

    let delivered = seen.recv().await.unwrap();
    assert_eq!(delivered.uri, "/v1/queues/q1/execute_run");
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(broker.delivered_delayed(), 1);
}

#[tokio::test]
async fn unbind_removes_consumer() {
    let broker = MemoryBroker::new();
    let (queue, _seen) = echo();
    broker.bind("q", queue);
    assert_eq!(broker.bound_queues(), vec!["q".to_string()]);

    assert!(broker.unbind("q"));
    assert!(!broker.unbind("q"));
    assert!(broker.bound_queues().is_empty());
}

#[tokio::test]
async fn facade_round_trip_over_memory_broker() {
    let known = Uuid::new_v4();
    let broker = Arc::new(MemoryBroker::new());
    broker.bind(Service::Agent.queue_name(), Arc::new(AgentQueue { known }));

    let handler = RequestHandler::new(ClientConfig::for_publisher("api-manager"), broker.clone()).unwrap();

    let agent = handler.agent_get(known).await.unwrap();
    assert_eq!(agent.id, known);
    assert_eq!(agent.username, "alice");

    let err = handler.agent_get(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusError::NotFound));

    // no consumer bound for the call-manager queue
    let err = handler.call_get(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(broker.published(), 2);
}
