use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    #[serde(rename = "")]
    None,
    Normal,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub emoji: String,
    pub owner_type: String,
    pub owner_id: Uuid,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub owner_type: String,
    pub owner_id: Uuid,
    pub chat_id: Uuid,
    /// Set on thread replies.
    pub parent_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub reactions: Vec<Reaction>,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageCreate<'a> {
    pub chat_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub owner_type: &'a str,
    pub owner_id: Uuid,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReactionAdd<'a> {
    pub owner_type: &'a str,
    pub owner_id: Uuid,
    pub emoji: &'a str,
}
