use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Starting,
    Progressing,
    Terminating,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conference {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub confbridge_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ConferenceStatus,
    pub name: String,
    pub detail: String,
    pub timeout: u64,
    pub recording_id: Uuid,
    pub conferencecall_ids: Vec<Uuid>,
    pub tm_create: Option<String>,
}
