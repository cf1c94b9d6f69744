//! webhook-manager: outbound event delivery to customers.
//!
//! The event payload is handed over as raw JSON and forwarded verbatim.

use serde_json::value::RawValue;
use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::{Result, SockRpcError};
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, CallOpts, RequestHandler, Route};
use crate::models::webhook::{WebhookMessage, WebhookSend, WebhookSendTo};

impl RequestHandler {
    /// Deliver an event to the customer's configured webhook.
    pub async fn webhook_send(&self, customer_id: Uuid, data_type: &str, message_type: &str, message_data: &[u8]) -> Result<()> {
        let data = raw_json(message_data)?;
        self.execute(
            Route::new(Service::Webhook, RequestMethod::Post, "/v1/webhooks", "webhook/webhooks"),
            CallOpts::now(),
            json(&WebhookSend {
                customer_id,
                data_type,
                data: WebhookMessage {
                    kind: message_type,
                    data,
                },
            })?,
        )
        .await
    }

    /// Deliver an event to an explicit uri instead of the customer's webhook.
    pub async fn webhook_send_to_destination(
        &self,
        customer_id: Uuid,
        uri: &str,
        method: &str,
        data_type: &str,
        message_type: &str,
        message_data: &[u8],
    ) -> Result<()> {
        let data = raw_json(message_data)?;
        self.execute(
            Route::new(Service::Webhook, RequestMethod::Post, "/v1/webhook_destinations", "webhook/webhook_destinations"),
            CallOpts::now(),
            json(&WebhookSendTo {
                customer_id,
                uri,
                method,
                data_type,
                data: WebhookMessage {
                    kind: message_type,
                    data,
                },
            })?,
        )
        .await
    }
}

fn raw_json(data: &[u8]) -> Result<&RawValue> {
    serde_json::from_slice(data).map_err(SockRpcError::Marshal)
}
