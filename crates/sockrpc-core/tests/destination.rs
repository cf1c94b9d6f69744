#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use sockrpc_core::{Destination, Service};

#[test]
fn service_queue_names() {
    assert_eq!(Destination::service(Service::Agent).as_str(), "bin-manager.agent-manager.request");
    assert_eq!(Destination::from(Service::Queue).as_str(), "bin-manager.queue-manager.request");
    assert_eq!(Service::Tts.queue_name(), "bin-manager.tts-manager.request");
}

#[test]
fn manifest_names_are_unique() {
    let names: HashSet<String> = Service::ALL.iter().map(|s| s.queue_name()).collect();
    assert_eq!(names.len(), Service::ALL.len());
}

#[test]
fn dynamic_destinations() {
    assert_eq!(
        Destination::asterisk("00:11:22:33:44:55").to_string(),
        "asterisk.00:11:22:33:44:55.request"
    );
    assert_eq!(
        Destination::pod(Service::Tts, "tts-manager-7f9c").as_str(),
        "bin-manager.tts-manager.request.tts-manager-7f9c"
    );
    assert_eq!(Destination::delay().as_str(), Destination::DELAY);
    assert_eq!(Destination::raw("custom.queue").as_str(), "custom.queue");
}
