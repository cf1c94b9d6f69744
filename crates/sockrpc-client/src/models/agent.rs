use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingMethod {
    #[default]
    #[serde(rename = "")]
    None,
    RingAll,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Available,
    Away,
    Busy,
    Offline,
    Ringing,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub username: String,
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
    pub status: AgentStatus,
    pub permission: u64,
    pub tag_ids: Vec<Uuid>,
    pub addresses: Vec<Address>,
    pub tm_create: Option<String>,
    pub tm_update: Option<String>,
    pub tm_delete: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AgentCreate<'a> {
    pub customer_id: Uuid,
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub detail: &'a str,
    pub ring_method: RingMethod,
    pub permission: u64,
    pub tag_ids: &'a [Uuid],
    pub addresses: &'a [Address],
}

#[derive(Debug, Serialize)]
pub(crate) struct AgentStatusUpdate {
    pub status: AgentStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct AgentAddressesUpdate<'a> {
    pub addresses: &'a [Address],
}
