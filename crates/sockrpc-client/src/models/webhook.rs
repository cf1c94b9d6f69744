use serde::Serialize;
use serde_json::value::RawValue;
use uuid::Uuid;

/// Event envelope delivered to the customer: `{"type": .., "data": ..}`.
#[derive(Debug, Serialize)]
pub(crate) struct WebhookMessage<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub data: &'a RawValue,
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookSend<'a> {
    pub customer_id: Uuid,
    pub data_type: &'a str,
    pub data: WebhookMessage<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WebhookSendTo<'a> {
    pub customer_id: Uuid,
    pub uri: &'a str,
    pub method: &'a str,
    pub data_type: &'a str,
    pub data: WebhookMessage<'a>,
}
