use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveflowStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Running,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: Uuid,
    pub next_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub option: Option<serde_json::Value>,
    pub tm_execute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activeflow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub status: ActiveflowStatus,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub reference_activeflow_id: Uuid,
    pub current_action: Action,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ActiveflowCreate<'a> {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub reference_type: &'a str,
    pub reference_id: Uuid,
    pub reference_activeflow_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct Substitute<'a> {
    pub data: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SubstituteReply {
    pub data: String,
}
