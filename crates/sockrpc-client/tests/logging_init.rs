#![allow(clippy::unwrap_used)]

use sockrpc_client::obs::logging;

#[test]
fn init_is_idempotent() {
    logging::init_with_default("debug").unwrap();
    // a subscriber is installed now; the second call keeps it
    assert!(!logging::init().unwrap());
}
