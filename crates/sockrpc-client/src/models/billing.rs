use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    #[serde(rename = "")]
    None,
    Prepaid,
}

/// What a balance check is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
    Sms,
    Number,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    pub balance: f32,
    pub payment_type: PaymentType,
    pub payment_method: String,
    pub tm_create: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Billing {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub account_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub cost_per_unit: f32,
    pub cost_total: f32,
    pub billing_unit_count: f32,
    pub tm_billing_start: Option<String>,
    pub tm_billing_end: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BalanceChange {
    pub balance: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct BalanceCheck<'a> {
    pub billing_type: ReferenceType,
    pub country: &'a str,
    pub count: u32,
}
