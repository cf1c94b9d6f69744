use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Active,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Number {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub number: String,
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
    pub status: NumberStatus,
    pub tm_renew: Option<String>,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RenewByDays {
    pub days: u32,
}
