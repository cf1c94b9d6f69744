use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AicallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Progressing,
    Pausing,
    Resuming,
    Terminating,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Aicall {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub ai_id: Uuid,
    pub activeflow_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub status: AicallStatus,
    pub language: String,
    pub tm_create: Option<String>,
}
