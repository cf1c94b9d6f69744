use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    None,
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Speech {
    pub gender: Gender,
    pub text: String,
    pub language: String,
    pub media_bucket_name: String,
    pub media_filepath: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Streaming {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Pod currently serving the session; pod-targeted calls go here.
    pub pod_id: String,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub message_id: Uuid,
    pub language: String,
    pub gender: Gender,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpeechCreate<'a> {
    pub call_id: Uuid,
    pub text: &'a str,
    pub gender: Gender,
    pub language: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SayInit {
    pub message_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct SayAdd<'a> {
    pub message_id: Uuid,
    pub text: &'a str,
}
