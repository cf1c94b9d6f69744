use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::billing::ReferenceType;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub detail: String,
    pub email: String,
    pub phone_number: String,
    pub billing_account_id: Uuid,
    pub tm_create: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CustomerBalanceCheck<'a> {
    pub reference_type: ReferenceType,
    pub country: &'a str,
    pub count: u32,
}
