use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flow::Action;
use super::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Stop,
    Stopping,
    Run,
}

/// What happens once the outdial runs out of targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndHandle {
    #[default]
    #[serde(rename = "")]
    None,
    Stop,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub name: String,
    pub detail: String,
    pub status: CampaignStatus,
    /// Percent of available agents to dial for.
    pub service_level: u32,
    pub end_handle: EndHandle,
    pub actions: Vec<Action>,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
    pub tm_create: Option<String>,
}

/// Resources a campaign dials with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignResources {
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaigncall {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub campaign_id: Uuid,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub outdial_target_id: Uuid,
    pub queue_id: Uuid,
    pub activeflow_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub status: String,
    pub result: String,
    pub source: Option<Address>,
    pub destination: Option<Address>,
    pub destination_index: u32,
    pub try_count: u32,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignCreate<'a> {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub name: &'a str,
    pub detail: &'a str,
    pub service_level: u32,
    pub end_handle: EndHandle,
    pub actions: &'a [Action],
    #[serde(flatten)]
    pub resources: CampaignResources,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignBasicInfo<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub service_level: u32,
    pub end_handle: EndHandle,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampaignStatusUpdate {
    pub status: CampaignStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceLevelUpdate {
    pub service_level: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ActionsUpdate<'a> {
    pub actions: &'a [Action],
}

#[derive(Debug, Serialize)]
pub(crate) struct NextCampaignUpdate {
    pub next_campaign_id: Uuid,
}
