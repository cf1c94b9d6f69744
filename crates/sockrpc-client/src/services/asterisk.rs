//! Asterisk proxy: channels.
//!
//! Every call targets one proxy instance, addressed by its device id.

use serde::{Deserialize, Serialize};

use sockrpc_core::destination::Destination;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, query_uri, CallOpts, RequestHandler, Route};

#[derive(Debug, Serialize)]
struct HangupReq {
    reason_code: String,
}

#[derive(Debug, Serialize)]
struct VariableSetReq<'a> {
    variable: &'a str,
    value: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VariableReply {
    value: String,
}

impl RequestHandler {
    pub async fn ast_channel_answer(&self, asterisk_id: &str, channel_id: &str) -> Result<()> {
        self.execute(
            Route::new(
                Destination::asterisk(asterisk_id),
                RequestMethod::Post,
                format!("/ari/channels/{channel_id}/answer"),
                "ast/channels/answer",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Hang up a channel with the given cause code, optionally after `delay_ms`.
    pub async fn ast_channel_hangup(&self, asterisk_id: &str, channel_id: &str, cause: u16, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Destination::asterisk(asterisk_id),
                RequestMethod::Delete,
                format!("/ari/channels/{channel_id}"),
                "ast/channels/hangup",
            ),
            CallOpts::delayed(delay_ms),
            json(&HangupReq {
                reason_code: cause.to_string(),
            })?,
        )
        .await
    }

    pub async fn ast_channel_variable_get(&self, asterisk_id: &str, channel_id: &str, variable: &str) -> Result<String> {
        let reply: VariableReply = self
            .fetch(
                Route::new(
                    Destination::asterisk(asterisk_id),
                    RequestMethod::Get,
                    query_uri(&format!("/ari/channels/{channel_id}/variable"), "variable", variable),
                    "ast/channels/var",
                ),
                CallOpts::now(),
                None,
            )
            .await?;
        Ok(reply.value)
    }

    pub async fn ast_channel_variable_set(&self, asterisk_id: &str, channel_id: &str, variable: &str, value: &str) -> Result<()> {
        self.execute(
            Route::new(
                Destination::asterisk(asterisk_id),
                RequestMethod::Post,
                format!("/ari/channels/{channel_id}/variable"),
                "ast/channels/var",
            ),
            CallOpts::now(),
            json(&VariableSetReq { variable, value })?,
        )
        .await
    }
}
