#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use uuid::Uuid;

use sockrpc_client::config::{self, ClientConfig};
use sockrpc_client::obs::ClientMetrics;
use sockrpc_client::{ops, router, RequestHandler};
use sockrpc_core::protocol::Response;

mod common;
use common::RecordingTransport;

#[test]
fn histogram_buckets_are_cumulative() {
    let m = ClientMetrics::default();
    let labels = [("target", "q"), ("resource", "r"), ("method", "GET")];
    m.request_process_time.observe(&labels, Duration::from_millis(40));
    m.request_process_time.observe(&labels, Duration::from_millis(700));
    m.request_process_time.observe(&labels, Duration::from_millis(9_000));

    let snap = m.request_process_time.snapshot(&labels).unwrap();
    assert_eq!(snap.count, 3);
    assert_eq!(snap.sum_millis, 9_740);
    assert_eq!(snap.buckets, vec![(50, 1), (100, 1), (500, 1), (1000, 2), (3000, 2)]);
}

#[test]
fn render_uses_namespace_and_sorted_labels() {
    let m = ClientMetrics::new("call_manager");
    m.request_failures.inc(&[("target", "bin-manager.flow-manager.request"), ("kind", "timeout")]);
    m.requests_in_flight.inc(&[("target", "q")]);
    m.requests_in_flight.dec(&[("target", "q")]);
    m.request_process_time
        .observe(&[("target", "q"), ("resource", "x"), ("method", "POST")], Duration::from_millis(60));

    let out = m.render();
    assert!(out.contains("# TYPE call_manager_request_failures_total counter"));
    assert!(out.contains(
        "call_manager_request_failures_total{kind=\"timeout\",target=\"bin-manager.flow-manager.request\"} 1"
    ));
    assert!(out.contains("call_manager_requests_in_flight{target=\"q\"} 0"));
    assert!(out.contains(
        "call_manager_request_process_time_millis_bucket{method=\"POST\",resource=\"x\",target=\"q\",le=\"100\"} 1"
    ));
    assert!(out.contains("call_manager_request_process_time_millis_count{method=\"POST\",resource=\"x\",target=\"q\"} 1"));
}

#[test]
fn label_values_are_escaped() {
    let m = ClientMetrics::default();
    m.request_failures.inc(&[("target", "a\"b")]);
    assert!(m.render().contains("request_failures_total{target=\"a\\\"b\"} 1"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let res = ops::healthz().await.into_response();
    assert_eq!(res.status(), axum::http::StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn metrics_endpoint_reports_handler_traffic() {
    let cfg = config::load_from_str(
        r#"
version: 1
client:
  publisher: "api-manager"
metrics:
  namespace: "api_manager"
"#,
    )
    .unwrap();
    let t = RecordingTransport::replying(Response::status(200));
    let h = RequestHandler::new(cfg, t).unwrap();
    h.agent_get(Uuid::new_v4()).await.unwrap();

    let res = ops::metrics(State(h)).await;
    assert_eq!(res.status(), axum::http::StatusCode::OK);
    assert_eq!(
        res.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(
        "api_manager_request_process_time_millis_count{method=\"GET\",resource=\"agent/agents/<agent-id>\",target=\"bin-manager.agent-manager.request\"} 1"
    ));
}

#[tokio::test]
async fn ops_router_serves_healthz() {
    let h = RequestHandler::new(
        ClientConfig::for_publisher("api-manager"),
        RecordingTransport::replying(Response::status(200)),
    )
    .unwrap();
    let app = router::build_ops_router(h);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut buf = String::new();
    stream.read_to_string(&mut buf).await.unwrap();

    assert!(buf.starts_with("HTTP/1.1 200"), "{buf}");
    assert!(buf.ends_with("ok"), "{buf}");
}
