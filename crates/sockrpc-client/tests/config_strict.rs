#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;

use sockrpc_client::config;
use sockrpc_core::error::{ErrorKind, SockRpcError};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
client:
  publisher: "call-manager"
  default_timeout: 3000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "config");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
client:
  publisher: "call-manager"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.client.publisher, "call-manager");
    assert_eq!(cfg.client.default_timeout_ms, 3000);
    assert_eq!(cfg.client.list_timeout_ms, 30000);
    assert_eq!(cfg.metrics.namespace, "");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
client:
  publisher: "queue-manager"
  default_timeout_ms: 5000
  list_timeout_ms: 60000
metrics:
  namespace: "queue_manager"
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.client.default_timeout_ms, 5000);
    assert_eq!(cfg.client.list_timeout_ms, 60000);
    assert_eq!(cfg.metrics.namespace, "queue_manager");
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
client:
  publisher: "call-manager"
"#;
    let err = config::load_from_str(bad).unwrap_err();
    assert!(matches!(err, SockRpcError::UnsupportedVersion));
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn publisher_required() {
    let bad = r#"
version: 1
client:
  publisher: "  "
"#;
    let err = config::load_from_str(bad).unwrap_err();
    assert!(err.to_string().contains("client.publisher"));
}

#[test]
fn timeout_out_of_range() {
    let bad = r#"
version: 1
client:
  publisher: "call-manager"
  default_timeout_ms: 10
"#;
    let err = config::load_from_str(bad).unwrap_err();
    assert!(err.to_string().contains("default_timeout_ms"));
}

#[test]
fn namespace_must_be_a_metric_prefix() {
    let bad = r#"
version: 1
client:
  publisher: "call-manager"
metrics:
  namespace: "Call-Manager"
"#;
    let err = config::load_from_str(bad).unwrap_err();
    assert!(err.to_string().contains("metrics.namespace"));
}

#[test]
fn load_from_file_reads_yaml() {
    let path = std::env::temp_dir().join(format!("sockrpc-config-{}.yaml", std::process::id()));
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "version: 1\nclient:\n  publisher: \"flow-manager\"").unwrap();
    drop(f);

    let cfg = config::load_from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.client.publisher, "flow-manager");
    std::fs::remove_file(&path).ok();

    let err = config::load_from_file("/nonexistent/sockrpc.yaml").unwrap_err();
    assert!(err.to_string().contains("read config failed"));
}
