//! Response parsing vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;
use serde::Deserialize;

use sockrpc_core::error::ErrorKind;
use sockrpc_core::protocol::Response;
use sockrpc_core::{decode_response, parse_response, StatusError};

mod vector_loader;
use vector_loader::ResponseVector;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Agent {
    id: String,
    name: String,
}

fn untouched() -> Agent {
    Agent {
        id: String::new(),
        name: "untouched".into(),
    }
}

#[test]
fn response_vectors() {
    let vectors: Vec<ResponseVector> = vector_loader::load("responses.json");

    for v in vectors {
        let res = Response {
            status_code: v.status_code,
            data_type: "application/json".into(),
            data: Bytes::from(v.payload.clone()),
        };
        let mut dest = untouched();
        let out = parse_response(Some(&res), Some(&mut dest));

        if let Some(ex) = v.expect_error {
            let err = out.expect_err("expected error");
            match ex.kind.as_str() {
                "status" => {
                    assert_eq!(err.kind(), ErrorKind::Status, "vector={}", v.description);
                    let status = err.status().unwrap();
                    assert_eq!(Some(status.code()), ex.status, "vector={}", v.description);
                }
                "decode" => assert_eq!(err.kind(), ErrorKind::Decode, "vector={}", v.description),
                other => panic!("unsupported kind: {other}"),
            }
            assert_eq!(dest, untouched(), "vector={}", v.description);
            continue;
        }

        out.expect("expected ok");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(dest.id, ex["id"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(dest.name, ex["name"].as_str().unwrap(), "vector={}", v.description);
    }
}

#[test]
fn nil_response_is_not_an_error() {
    let mut dest = untouched();
    parse_response(None, Some(&mut dest)).unwrap();
    assert_eq!(dest, untouched());

    parse_response::<Agent>(None, None).unwrap();
}

#[test]
fn status_is_checked_without_destination() {
    let res = Response::status(503);
    let err = parse_response::<Agent>(Some(&res), None).unwrap_err();
    assert_eq!(err.status(), Some(StatusError::ServiceUnavailable));

    let ok = Response::json(200, "{garbage");
    parse_response::<Agent>(Some(&ok), None).unwrap();
}

#[test]
fn null_payload_is_treated_as_empty() {
    let items: Vec<u32> = decode_response(Some(&Response::json(200, "null"))).unwrap();
    assert!(items.is_empty());

    let mut dest = untouched();
    parse_response(Some(&Response::json(200, " null\n")), Some(&mut dest)).unwrap();
    assert_eq!(dest, untouched());

    let mut dest = untouched();
    parse_response(Some(&Response::json(200, "  ")), Some(&mut dest)).unwrap();
    assert_eq!(dest, untouched());
}

#[test]
fn out_of_range_status_reports_unknown() {
    let err = parse_response::<Agent>(Some(&Response::json(70000, r#"{"id":"a"}"#)), None).unwrap_err();
    assert_eq!(err.status(), Some(StatusError::Unknown(70000)));

    let mut dest = untouched();
    let err = parse_response(Some(&Response::json(-1, r#"{"id":"a"}"#)), Some(&mut dest)).unwrap_err();
    assert_eq!(err.status(), Some(StatusError::Unknown(-1)));
    assert_eq!(dest, untouched());
}

#[test]
fn decodes_uuid_ids_exactly() {
    #[derive(Debug, Default, Deserialize)]
    struct Call {
        id: uuid::Uuid,
    }

    let id = uuid::Uuid::new_v4();
    let res = Response::json(200, format!(r#"{{"id":"{id}"}}"#));
    let call: Call = decode_response(Some(&res)).unwrap();
    assert_eq!(call.id, id);
}

#[test]
fn decode_response_defaults_when_nothing_to_decode() {
    let agent: Agent = decode_response(None).unwrap();
    assert_eq!(agent, Agent::default());

    let agent: Agent = decode_response(Some(&Response::status(204))).unwrap();
    assert_eq!(agent, Agent::default());

    let err = decode_response::<Agent>(Some(&Response::status(404))).unwrap_err();
    assert_eq!(err.status(), Some(StatusError::NotFound));
}
