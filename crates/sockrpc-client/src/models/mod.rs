//! Typed request/response bodies exchanged with the downstream services.
//!
//! Only the fields this client reads or writes are modelled; unknown fields
//! in replies are ignored and missing ones default.

pub mod agent;
pub mod ai;
pub mod billing;
pub mod call;
pub mod campaign;
pub mod chat;
pub mod conference;
pub mod customer;
pub mod flow;
pub mod number;
pub mod outdial;
pub mod queue;
pub mod registrar;
pub mod talk;
pub mod transcribe;
pub mod tts;
pub mod webhook;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// List filters, sent as the JSON body of list calls.
pub type Filters = BTreeMap<String, serde_json::Value>;

/// Address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    #[serde(rename = "")]
    None,
    Agent,
    Conference,
    Email,
    Extension,
    Line,
    Sip,
    Tel,
}

/// Endpoint address (phone number, sip uri, agent, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub target: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Address {
    pub fn tel(number: impl Into<String>) -> Self {
        Self {
            kind: AddressType::Tel,
            target: number.into(),
            ..Self::default()
        }
    }
}

/// `{"count": n}` reply of the count-by-customer calls.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CountReply {
    pub count: u64,
}

/// `{"valid": bool}` reply of the balance/limit checks.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ValidReply {
    pub valid: bool,
}
