use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscribeStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Progressing,
    Done,
}

/// Which leg of the audio is transcribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscribeDirection {
    #[default]
    #[serde(rename = "")]
    None,
    Both,
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transcribe {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub status: TranscribeStatus,
    pub host_id: Uuid,
    pub language: String,
    pub direction: TranscribeDirection,
    pub streaming_ids: Vec<Uuid>,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranscribeStart<'a> {
    pub customer_id: Uuid,
    pub activeflow_id: Uuid,
    pub on_end_flow_id: Uuid,
    pub reference_type: &'a str,
    pub reference_id: Uuid,
    pub language: &'a str,
    pub direction: TranscribeDirection,
}
