//! Envelope wire-format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use sockrpc_core::protocol::{Request, RequestMethod, Response, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
use sockrpc_core::StatusError;

#[test]
fn request_embeds_payload_as_raw_json() {
    let req = Request {
        uri: "/v1/agents".into(),
        method: RequestMethod::Post,
        publisher: "queue-manager".into(),
        data_type: CONTENT_TYPE_JSON.into(),
        data: Bytes::from_static(br#"{"username":"test1","tag_ids":[]}"#),
    };

    let s = serde_json::to_string(&req).unwrap();
    assert_eq!(
        s,
        r#"{"uri":"/v1/agents","method":"POST","publisher":"queue-manager","data_type":"application/json","data":{"username":"test1","tag_ids":[]}}"#
    );

    let back: Request = serde_json::from_str(&s).unwrap();
    assert_eq!(back, req);
}

#[test]
fn empty_payload_is_omitted() {
    let req = Request {
        uri: "/v1/queuecalls/ff5c5fba-60b3-11ec-97c3-ff9e56e19a78/timeout_wait".into(),
        method: RequestMethod::Post,
        publisher: String::new(),
        data_type: String::new(),
        data: Bytes::new(),
    };
    let s = serde_json::to_string(&req).unwrap();
    assert!(!s.contains("\"data\""), "{s}");
}

#[test]
fn non_json_payload_cannot_be_serialized() {
    let req = Request {
        uri: "/v1/calls".into(),
        method: RequestMethod::Put,
        publisher: String::new(),
        data_type: CONTENT_TYPE_TEXT.into(),
        data: Bytes::from_static(b"hello"),
    };
    assert!(serde_json::to_string(&req).is_err());
}

#[test]
fn response_missing_or_null_data_is_empty() {
    let r: Response = serde_json::from_str(r#"{"status_code":200}"#).unwrap();
    assert!(r.data.is_empty());
    assert_eq!(r.data_type, "");

    let r: Response = serde_json::from_str(r#"{"status_code":404,"data_type":"application/json","data":null}"#).unwrap();
    assert!(r.data.is_empty());
    assert_eq!(r.status_code, 404);
}

#[test]
fn response_keeps_payload_bytes_verbatim() {
    let r: Response =
        serde_json::from_str(r#"{"status_code":200,"data_type":"application/json","data":[{"id":"07e42460-6159-11ec-8191-3b89ed95cdb5"}]}"#)
            .unwrap();
    assert_eq!(&r.data[..], br#"[{"id":"07e42460-6159-11ec-8191-3b89ed95cdb5"}]"#);
    assert!(r.status_error().is_none());
}

#[test]
fn response_status_outside_http_range_is_unknown() {
    let r: Response = serde_json::from_str(r#"{"status_code":70000}"#).unwrap();
    assert_eq!(r.status_code, 70000);
    assert_eq!(r.status_error(), Some(StatusError::Unknown(70000)));

    let r: Response = serde_json::from_str(r#"{"status_code":-1,"data_type":"application/json","data":{"id":"x"}}"#).unwrap();
    assert_eq!(r.status_code, -1);
    assert_eq!(r.status_error(), Some(StatusError::Unknown(-1)));

    let back = serde_json::to_string(&Response::status(-1)).unwrap();
    assert_eq!(back, r#"{"status_code":-1,"data_type":""}"#);
}

#[test]
fn method_labels() {
    assert_eq!(RequestMethod::Get.to_string(), "GET");
    assert_eq!(RequestMethod::Delete.as_str(), "DELETE");
    let m: RequestMethod = serde_json::from_str("\"PUT\"").unwrap();
    assert_eq!(m, RequestMethod::Put);
}
