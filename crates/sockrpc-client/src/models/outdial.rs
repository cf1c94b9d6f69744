use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Address;

/// Number of destination slots on an outdial target.
pub const DESTINATION_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Outdial {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    pub detail: String,
    pub data: String,
    pub tm_create: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Idle,
    Progressing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdialTarget {
    pub id: Uuid,
    pub outdial_id: Uuid,
    pub name: String,
    pub detail: String,
    pub data: String,
    pub status: TargetStatus,
    pub destination_0: Option<Address>,
    pub destination_1: Option<Address>,
    pub destination_2: Option<Address>,
    pub destination_3: Option<Address>,
    pub destination_4: Option<Address>,
    pub try_count_0: u32,
    pub try_count_1: u32,
    pub try_count_2: u32,
    pub try_count_3: u32,
    pub try_count_4: u32,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutdialCreate<'a> {
    pub customer_id: Uuid,
    pub campaign_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
    pub data: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TargetCreate<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_0: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_1: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_2: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_3: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_4: Option<&'a Address>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TargetProgressing {
    pub destination_index: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct TargetStatusUpdate {
    pub status: TargetStatus,
}
