#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use bytes::Bytes;

use sockrpc_client::dispatch::{Dispatcher, Outbound};
use sockrpc_client::obs::ClientMetrics;
use sockrpc_core::destination::{Destination, Service};
use sockrpc_core::error::{ErrorKind, SockRpcError};
use sockrpc_core::protocol::{RequestMethod, Response, CONTENT_TYPE_JSON};
use sockrpc_core::{parse_response, StatusError};

mod common;
use common::{RecordingTransport, Reply};

fn dispatcher(transport: Arc<RecordingTransport>) -> (Dispatcher, Arc<ClientMetrics>) {
    let metrics = Arc::new(ClientMetrics::default());
    let d = Dispatcher::new(transport, "call-manager", 3000, Arc::clone(&metrics));
    (d, metrics)
}

fn outbound(uri: &str, timeout_ms: u64, delay_ms: u64) -> Outbound<'_> {
    Outbound {
        uri,
        method: RequestMethod::Post,
        resource: "call/calls/<call-id>/health-check",
        timeout_ms,
        delay_ms,
        data_type: CONTENT_TYPE_JSON,
        data: Bytes::from_static(br#"{"retry_count":2}"#),
    }
}

#[tokio::test]
async fn immediate_send_returns_reply_and_records_latency() {
    let t = RecordingTransport::replying(Response::json(200, r#"{"id":"c1"}"#));
    let (d, metrics) = dispatcher(Arc::clone(&t));
    let dest = Destination::service(Service::Call);

    let res = d
        .send_request(&dest, outbound("/v1/calls/c1/health-check", 0, 0))
        .await
        .unwrap()
        .expect("immediate send yields a reply");
    assert_eq!(res.status_code, 200);

    let p = t.only();
    assert_eq!(p.queue, "bin-manager.call-manager.request");
    assert_eq!(p.delay_ms, None);
    assert_eq!(p.req.publisher, "call-manager");
    assert_eq!(p.req.uri, "/v1/calls/c1/health-check");
    assert_eq!(p.req.method, RequestMethod::Post);
    assert_eq!(p.req.data_type, CONTENT_TYPE_JSON);
    assert_eq!(&p.req.data[..], br#"{"retry_count":2}"#);

    let snap = metrics
        .request_process_time
        .snapshot(&[
            ("target", "bin-manager.call-manager.request"),
            ("resource", "call/calls/<call-id>/health-check"),
            ("method", "POST"),
        ])
        .expect("latency observed under the destination");
    assert_eq!(snap.count, 1);
    assert_eq!(metrics.requests_in_flight.get(&[("target", "bin-manager.call-manager.request")]), 0);
}

#[tokio::test]
async fn delayed_send_returns_no_reply() {
    let t = RecordingTransport::replying(Response::status(200));
    let (d, metrics) = dispatcher(Arc::clone(&t));
    let dest = Destination::service(Service::Call);

    let res = d
        .send_request(&dest, outbound("/v1/calls/c1/health-check", 0, 10_000))
        .await
        .unwrap();
    assert!(res.is_none());

    let p = t.only();
    assert_eq!(p.queue, "bin-manager.call-manager.request");
    assert_eq!(p.delay_ms, Some(10_000));

    // delayed publishes are timed under the delay tag, not the queue
    let labels = |target| {
        [
            ("target", target),
            ("resource", "call/calls/<call-id>/health-check"),
            ("method", "POST"),
        ]
    };
    assert_eq!(metrics.request_process_time.snapshot(&labels(Destination::DELAY)).unwrap().count, 1);
    assert!(metrics
        .request_process_time
        .snapshot(&labels("bin-manager.call-manager.request"))
        .is_none());

    // nothing was awaited, so there is nothing to parse
    parse_response::<()>(res.as_ref(), None).unwrap();
}

#[tokio::test]
async fn failure_status_is_returned_unmodified() {
    let t = RecordingTransport::replying(Response::json(404, r#"{"message":"no such call"}"#));
    let (d, metrics) = dispatcher(Arc::clone(&t));

    let res = d
        .send_request(&Destination::service(Service::Call), outbound("/v1/calls/c1", 0, 0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(res.status_code, 404);
    assert_eq!(&res.data[..], br#"{"message":"no such call"}"#);
    assert_eq!(metrics.request_failures.get(&[("target", "bin-manager.call-manager.request"), ("kind", "status")]), 0);

    let err = parse_response::<serde_json::Value>(Some(&res), None).unwrap_err();
    assert_eq!(err.status(), Some(StatusError::NotFound));
}

#[tokio::test]
async fn transport_failure_names_queue_method_and_uri() {
    let t = RecordingTransport::with(Reply::Fail);
    let (d, metrics) = dispatcher(t);

    let err = d
        .send_request(&Destination::asterisk("42:01:0a:a4:00:05"), outbound("/ari/channels/ch1/answer", 0, 0))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    let msg = err.to_string();
    assert!(msg.contains("asterisk.42:01:0a:a4:00:05.request"), "{msg}");
    assert!(msg.contains("POST"), "{msg}");
    assert!(msg.contains("/ari/channels/ch1/answer"), "{msg}");

    assert_eq!(
        metrics
            .request_failures
            .get(&[("target", "asterisk.42:01:0a:a4:00:05.request"), ("kind", "transport")]),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn unanswered_send_times_out_after_the_requested_timeout() {
    let t = RecordingTransport::with(Reply::Hang);
    let (d, metrics) = dispatcher(t);
    let started = tokio::time::Instant::now();

    let err = d
        .send_request(&Destination::service(Service::Flow), outbound("/v1/activeflows/a1/execute", 500, 0))
        .await
        .unwrap_err();

    assert!(started.elapsed() >= std::time::Duration::from_millis(500));
    match &err {
        SockRpcError::Timeout { queue, uri, timeout_ms, .. } => {
            assert_eq!(queue, "bin-manager.flow-manager.request");
            assert_eq!(uri, "/v1/activeflows/a1/execute");
            assert_eq!(*timeout_ms, 500);
        }
        other => panic!("expected timeout, got {other:?}"),
    }
    assert_eq!(metrics.requests_in_flight.get(&[("target", "bin-manager.flow-manager.request")]), 0);
}

#[tokio::test(start_paused = true)]
async fn zero_timeout_uses_configured_default() {
    let t = RecordingTransport::with(Reply::Hang);
    let (d, _) = dispatcher(t);

    let err = d
        .send_request(&Destination::service(Service::Flow), outbound("/v1/activeflows/a1/execute", 0, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, SockRpcError::Timeout { timeout_ms: 3000, .. }), "{err:?}");
}

#[tokio::test(start_paused = true)]
async fn dropped_send_leaves_in_flight_gauge_balanced() {
    let t = RecordingTransport::with(Reply::Hang);
    let (d, metrics) = dispatcher(t);
    let dest = Destination::service(Service::Queue);

    let cancelled = tokio::time::timeout(
        std::time::Duration::from_millis(50),
        d.send_request(&dest, outbound("/v1/queues/q1", 10_000, 0)),
    )
    .await;
    assert!(cancelled.is_err());
    assert_eq!(metrics.requests_in_flight.get(&[("target", "bin-manager.queue-manager.request")]), 0);
}

#[tokio::test]
async fn schedule_failure_is_reported() {
    let t = RecordingTransport::failing_schedule();
    let (d, metrics) = dispatcher(t);

    let err = d
        .send_request(&Destination::service(Service::Call), outbound("/v1/calls/c1/health-check", 0, 1000))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Schedule);
    assert!(err.to_string().contains("/v1/calls/c1/health-check"));
    assert_eq!(
        metrics
            .request_failures
            .get(&[("target", "bin-manager.call-manager.request"), ("kind", "schedule")]),
        1
    );
}

#[tokio::test]
async fn passthrough_send_uses_empty_resource_label() {
    let t = RecordingTransport::replying(Response::status(200));
    let (d, metrics) = dispatcher(Arc::clone(&t));

    d.send(
        &Destination::raw("bin-manager.custom.request"),
        "/v1/ping",
        RequestMethod::Get,
        0,
        0,
        "",
        Bytes::new(),
    )
    .await
    .unwrap();

    assert_eq!(t.only().queue, "bin-manager.custom.request");
    assert!(metrics
        .request_process_time
        .snapshot(&[("target", "bin-manager.custom.request"), ("resource", ""), ("method", "GET")])
        .is_some());
}
