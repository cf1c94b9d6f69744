use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMethod {
    #[default]
    #[serde(rename = "")]
    None,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuecallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Waiting,
    Connecting,
    Kicking,
    Service,
    Done,
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    pub routing_method: RoutingMethod,
    pub tag_ids: Vec<Uuid>,
    pub wait_timeout: u64,
    pub service_timeout: u64,
    pub wait_queuecall_ids: Vec<Uuid>,
    pub service_queuecall_ids: Vec<Uuid>,
    pub tm_create: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Queuecall {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub queue_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub reference_activeflow_id: Uuid,
    pub status: QueuecallStatus,
    pub service_agent_id: Uuid,
    pub tm_create: Option<String>,
}
