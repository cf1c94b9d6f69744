use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    #[default]
    #[serde(rename = "")]
    None,
    Normal,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub room_owner_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub name: String,
    pub detail: String,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCreate<'a> {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub room_owner_id: Uuid,
    pub participant_ids: &'a [Uuid],
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatBasicInfo<'a> {
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoomOwnerUpdate {
    pub room_owner_id: Uuid,
}

#[derive(Debug, Serialize)]
pub(crate) struct ParticipantAdd {
    pub participant_id: Uuid,
}
