//! Queue addressing.
//!
//! Every downstream service listens on one fixed request queue. A few calls
//! target a single instance instead: Asterisk proxies are addressed by device
//! id, and pod-bound sessions (TTS streaming) by pod id. All names are built
//! here so the scheme lives in one place.

use std::fmt;

/// Downstream services reachable over the request queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Agent,
    Ai,
    Billing,
    Call,
    Campaign,
    Chat,
    Conference,
    Contact,
    Conversation,
    Customer,
    Email,
    Flow,
    Hook,
    Message,
    Number,
    Outdial,
    Pipecat,
    Queue,
    Registrar,
    Route,
    Storage,
    Tag,
    Talk,
    Timeline,
    Transcribe,
    Transfer,
    Tts,
    Webhook,
}

impl Service {
    /// All services, in manifest order.
    pub const ALL: [Service; 28] = [
        Service::Agent,
        Service::Ai,
        Service::Billing,
        Service::Call,
        Service::Campaign,
        Service::Chat,
        Service::Conference,
        Service::Contact,
        Service::Conversation,
        Service::Customer,
        Service::Email,
        Service::Flow,
        Service::Hook,
        Service::Message,
        Service::Number,
        Service::Outdial,
        Service::Pipecat,
        Service::Queue,
        Service::Registrar,
        Service::Route,
        Service::Storage,
        Service::Tag,
        Service::Talk,
        Service::Timeline,
        Service::Transcribe,
        Service::Transfer,
        Service::Tts,
        Service::Webhook,
    ];

    /// Short service name, e.g. `"queue"`.
    pub fn name(self) -> &'static str {
        match self {
            Service::Agent => "agent",
            Service::Ai => "ai",
            Service::Billing => "billing",
            Service::Call => "call",
            Service::Campaign => "campaign",
            Service::Chat => "chat",
            Service::Conference => "conference",
            Service::Contact => "contact",
            Service::Conversation => "conversation",
            Service::Customer => "customer",
            Service::Email => "email",
            Service::Flow => "flow",
            Service::Hook => "hook",
            Service::Message => "message",
            Service::Number => "number",
            Service::Outdial => "outdial",
            Service::Pipecat => "pipecat",
            Service::Queue => "queue",
            Service::Registrar => "registrar",
            Service::Route => "route",
            Service::Storage => "storage",
            Service::Tag => "tag",
            Service::Talk => "talk",
            Service::Timeline => "timeline",
            Service::Transcribe => "transcribe",
            Service::Transfer => "transfer",
            Service::Tts => "tts",
            Service::Webhook => "webhook",
        }
    }

    /// The service's request queue, e.g. `bin-manager.queue-manager.request`.
    pub fn queue_name(self) -> String {
        format!("bin-manager.{}-manager.request", self.name())
    }
}

/// Logical queue name a request is published to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination(String);

impl Destination {
    /// Metrics target used for delayed publishes.
    pub const DELAY: &'static str = "bin-manager.delay";

    /// A service's shared request queue.
    pub fn service(svc: Service) -> Self {
        Self(svc.queue_name())
    }

    /// One service instance (pod) behind the shared queue.
    pub fn pod(svc: Service, pod_id: &str) -> Self {
        Self(format!("{}.{}", svc.queue_name(), pod_id))
    }

    /// An Asterisk proxy, keyed by its device id.
    pub fn asterisk(asterisk_id: &str) -> Self {
        Self(format!("asterisk.{asterisk_id}.request"))
    }

    /// The delayed-publish tag.
    pub fn delay() -> Self {
        Self(Self::DELAY.to_string())
    }

    /// Any other queue name, used verbatim.
    pub fn raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Service> for Destination {
    fn from(svc: Service) -> Self {
        Destination::service(svc)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
