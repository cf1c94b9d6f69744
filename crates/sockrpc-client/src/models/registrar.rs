use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A SIP extension registered with the registrar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub domain_id: Uuid,
    pub name: String,
    pub detail: String,
    pub extension: String,
    pub password: String,
    pub tm_create: Option<String>,
    pub tm_update: Option<String>,
    pub tm_delete: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtensionCreate<'a> {
    pub customer_id: Uuid,
    pub extension: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtensionUpdate<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub password: &'a str,
}
