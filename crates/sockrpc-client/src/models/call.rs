use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Dialing,
    Ringing,
    Progressing,
    Terminating,
    Canceling,
    Hangup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[serde(rename = "")]
    None,
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Call {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub activeflow_id: Uuid,
    pub confbridge_id: Uuid,
    pub status: CallStatus,
    pub direction: Direction,
    pub source: Address,
    pub destination: Address,
    pub chained_call_ids: Vec<Uuid>,
    pub hangup_reason: String,
    pub tm_create: Option<String>,
    pub tm_hangup: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthCheck {
    pub retry_count: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ActionTimeout {
    pub action_id: Uuid,
    pub action_type: String,
    pub tm_execute: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Digits {
    pub digits: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Talk<'a> {
    pub text: &'a str,
    pub gender: &'a str,
    pub language: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupcallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Progressing,
    Hangingup,
    Hangup,
}

/// A fan-out of calls to several destinations at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Groupcall {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: GroupcallStatus,
    pub flow_id: Uuid,
    pub source: Option<Address>,
    pub destinations: Option<Vec<Address>>,
    pub master_call_id: Uuid,
    pub master_groupcall_id: Uuid,
    pub ring_method: String,
    pub answer_method: String,
    pub answer_call_id: Uuid,
    pub call_ids: Option<Vec<Uuid>>,
    pub answer_groupcall_id: Uuid,
    pub groupcall_ids: Option<Vec<Uuid>>,
    pub call_count: u32,
    pub groupcall_count: u32,
    pub tm_create: Option<String>,
}

/// Reply of a multi-destination create: plain calls plus groupcalls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallsCreated {
    pub calls: Vec<Call>,
    pub groupcalls: Vec<Groupcall>,
}

/// Media direction for mute and external media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDirection {
    #[default]
    #[serde(rename = "")]
    None,
    Both,
    In,
    Out,
}

/// External media leg parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExternalMedia {
    pub external_media_id: Uuid,
    pub external_host: String,
    pub encapsulation: String,
    pub transport: String,
    pub connection_type: String,
    pub format: String,
    pub direction_listen: MediaDirection,
    pub direction_speak: MediaDirection,
}

/// Recording parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recording {
    pub format: String,
    /// Seconds of silence that end the recording; 0 = never.
    pub end_of_silence: u32,
    pub end_of_key: String,
    /// Max length in seconds.
    pub duration: u32,
    pub on_end_flow_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct ActionNext {
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CallsCreate<'a> {
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub master_call_id: Uuid,
    pub source: &'a Address,
    pub destinations: &'a [Address],
    pub early_execution: bool,
    pub connect: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CallCreateWithId<'a> {
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub activeflow_id: Uuid,
    pub master_call_id: Uuid,
    pub source: &'a Address,
    pub destination: &'a Address,
    pub groupcall_id: Uuid,
    pub early_execution: bool,
    pub connect: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChainedCallAdd {
    pub chained_call_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfbridgeUpdate {
    pub confbridge_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct Play<'a> {
    pub media_urls: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct Mute {
    pub direction: MediaDirection,
}
