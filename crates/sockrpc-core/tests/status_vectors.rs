//! Status code mapping vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sockrpc_core::status::{error_for, StatusError, KNOWN_STATUS};

mod vector_loader;
use vector_loader::StatusVectors;

#[test]
fn success_codes_map_to_none() {
    let v: StatusVectors = vector_loader::load("status_codes.json");
    for code in v.success {
        assert_eq!(error_for(code), None, "code={code}");
    }
}

#[test]
fn known_codes_map_to_their_sentinel() {
    let v: StatusVectors = vector_loader::load("status_codes.json");
    for k in v.known {
        let err = error_for(k.code).expect("known code must map");
        assert!(!err.is_unknown(), "code={}", k.code);
        assert_eq!(err.code(), k.code);
        assert_eq!(err.to_string(), k.message, "code={}", k.code);
    }
}

#[test]
fn every_table_entry_round_trips() {
    for (code, sentinel) in KNOWN_STATUS {
        assert_eq!(error_for(*code), Some(*sentinel), "code={code}");
        assert_eq!(sentinel.code(), *code);
    }
}

#[test]
fn unmapped_codes_fall_back_to_unknown() {
    let v: StatusVectors = vector_loader::load("status_codes.json");
    for code in v.unknown {
        let err = error_for(code).expect("failure code must map");
        assert_eq!(err, StatusError::Unknown(code));
        assert!(err.is_unknown());
        assert_eq!(err.code(), code);
        assert!(err.to_string().contains(&code.to_string()), "msg={err}");
    }
}

#[test]
fn sentinels_compare_by_identity() {
    assert_eq!(error_for(404), Some(StatusError::NotFound));
    assert_ne!(error_for(404), error_for(410));
    assert_ne!(error_for(499), error_for(599));
}

#[test]
fn negative_codes_are_failures() {
    for code in [-1, -200, i32::MIN] {
        let err = error_for(code).expect("negative code must map");
        assert_eq!(err, StatusError::Unknown(code));
        assert_eq!(err.code(), code);
    }
    assert_eq!(error_for(0), None);
}
