//! call-manager: calls.

use bytes::Bytes;
use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::call::{
    ActionNext, ActionTimeout, Call, CallCreateWithId, CallsCreate, CallsCreated, ChainedCallAdd, ConfbridgeUpdate, Digits,
    ExternalMedia, HealthCheck, MediaDirection, Mute, Play, Recording, Talk,
};
use crate::models::{Address, Filters};

impl RequestHandler {
    pub async fn call_get(&self, call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(Service::Call, RequestMethod::Get, format!("/v1/calls/{call_id}"), "call/calls/<call-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn call_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Call>> {
        self.fetch(
            Route::new(Service::Call, RequestMethod::Get, page_uri("/v1/calls", page_token, page_size), "call/calls"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn call_hangup(&self, call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/hangup"),
                "call/calls/<call-id>/hangup",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Schedule a health check of the call after `delay_ms`.
    pub async fn call_health(&self, call_id: Uuid, delay_ms: u64, retry_count: u32) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/health-check"),
                "call/calls/<call-id>/health-check",
            ),
            CallOpts::delayed(delay_ms),
            json(&HealthCheck { retry_count })?,
        )
        .await
    }

    /// Fire the timeout of the given flow action after `delay_ms`.
    pub async fn call_action_timeout(
        &self,
        call_id: Uuid,
        delay_ms: u64,
        action_id: Uuid,
        action_type: &str,
        tm_execute: &str,
    ) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/action-timeout"),
                "call/calls/<call-id>/action-timeout",
            ),
            CallOpts::delayed(delay_ms),
            json(&ActionTimeout {
                action_id,
                action_type: action_type.to_string(),
                tm_execute: tm_execute.to_string(),
            })?,
        )
        .await
    }

    /// Digits received on the call so far.
    pub async fn call_get_digits(&self, call_id: Uuid) -> Result<String> {
        let reply: Digits = self
            .fetch(
                Route::new(
                    Service::Call,
                    RequestMethod::Get,
                    format!("/v1/calls/{call_id}/digits"),
                    "call/calls/<call-id>/digits",
                ),
                CallOpts::now(),
                None,
            )
            .await?;
        Ok(reply.digits)
    }

    pub async fn call_send_digits(&self, call_id: Uuid, digits: &str) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/digits"),
                "call/calls/<call-id>/digits",
            ),
            CallOpts::now(),
            json(&Digits {
                digits: digits.to_string(),
            })?,
        )
        .await
    }

    /// Speak `text` on the call. Synthesis can be slow, so the caller picks the timeout.
    pub async fn call_talk(&self, timeout_ms: u64, call_id: Uuid, text: &str, gender: &str, language: &str) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/talk"),
                "call/calls/<call-id>/talk",
            ),
            CallOpts::timeout(timeout_ms),
            json(&Talk { text, gender, language })?,
        )
        .await
    }

    /// Create calls to every destination; multi-target destinations become groupcalls.
    #[allow(clippy::too_many_arguments)]
    pub async fn call_calls_create(
        &self,
        customer_id: Uuid,
        flow_id: Uuid,
        master_call_id: Uuid,
        source: &Address,
        destinations: &[Address],
        early_execution: bool,
        connect: bool,
    ) -> Result<CallsCreated> {
        self.fetch(
            Route::new(Service::Call, RequestMethod::Post, "/v1/calls", "call/calls"),
            CallOpts::now(),
            json(&CallsCreate {
                customer_id,
                flow_id,
                master_call_id,
                source,
                destinations,
                early_execution,
                connect,
            })?,
        )
        .await
    }

    /// Create a single call under a caller-chosen id.
    #[allow(clippy::too_many_arguments)]
    pub async fn call_create_with_id(
        &self,
        call_id: Uuid,
        customer_id: Uuid,
        flow_id: Uuid,
        activeflow_id: Uuid,
        master_call_id: Uuid,
        source: &Address,
        destination: &Address,
        groupcall_id: Uuid,
        early_execution: bool,
        connect: bool,
    ) -> Result<Call> {
        self.fetch(
            Route::new(Service::Call, RequestMethod::Post, format!("/v1/calls/{call_id}"), "call/calls/<call-id>"),
            CallOpts::now(),
            json(&CallCreateWithId {
                customer_id,
                flow_id,
                activeflow_id,
                master_call_id,
                source,
                destination,
                groupcall_id,
                early_execution,
                connect,
            })?,
        )
        .await
    }

    pub async fn call_delete(&self, call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(Service::Call, RequestMethod::Delete, format!("/v1/calls/{call_id}"), "call/calls/<call-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Move the call to its next flow action. `force` skips the current action's completion.
    pub async fn call_action_next(&self, call_id: Uuid, force: bool) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/action-next"),
                "call/calls/<call-id>/action-next",
            ),
            CallOpts::now(),
            json(&ActionNext { force })?,
        )
        .await
    }

    pub async fn call_chained_call_add(&self, call_id: Uuid, chained_call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/chained-call-ids"),
                "call/calls/<call-id>/chained-call-ids",
            ),
            CallOpts::now(),
            json(&ChainedCallAdd { chained_call_id })?,
        )
        .await
    }

    pub async fn call_chained_call_remove(&self, call_id: Uuid, chained_call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Delete,
                format!("/v1/calls/{call_id}/chained-call-ids/{chained_call_id}"),
                "call/calls/<call-id>/chained-call-ids/<chained-call-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn call_external_media_start(&self, call_id: Uuid, media: &ExternalMedia) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/external-media"),
                "call/calls/<call-id>/external-media",
            ),
            CallOpts::now(),
            json(media)?,
        )
        .await
    }

    pub async fn call_external_media_stop(&self, call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Delete,
                format!("/v1/calls/{call_id}/external-media"),
                "call/calls/<call-id>/external-media",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn call_recording_start(&self, call_id: Uuid, recording: &Recording) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/recording_start"),
                "call/calls/<call-id>/recording_start",
            ),
            CallOpts::now(),
            json(recording)?,
        )
        .await
    }

    pub async fn call_recording_stop(&self, call_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/recording_stop"),
                "call/calls/<call-id>/recording_stop",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Move the call into another confbridge.
    pub async fn call_update_confbridge_id(&self, call_id: Uuid, confbridge_id: Uuid) -> Result<Call> {
        self.fetch(
            Route::new(
                Service::Call,
                RequestMethod::Put,
                format!("/v1/calls/{call_id}/confbridge_id"),
                "call/calls/<call-id>/confbridge_id",
            ),
            CallOpts::now(),
            json(&ConfbridgeUpdate { confbridge_id })?,
        )
        .await
    }

    pub async fn call_play(&self, call_id: Uuid, media_urls: &[String]) -> Result<()> {
        self.execute(
            Route::new(Service::Call, RequestMethod::Post, format!("/v1/calls/{call_id}/play"), "call/calls/<call-id>/play"),
            CallOpts::now(),
            json(&Play { media_urls })?,
        )
        .await
    }

    pub async fn call_media_stop(&self, call_id: Uuid) -> Result<()> {
        self.execute(
            Route::new(
                Service::Call,
                RequestMethod::Post,
                format!("/v1/calls/{call_id}/media_stop"),
                "call/calls/<call-id>/media_stop",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn call_hold_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Post, "hold", "call/calls/<call-id>/hold", None).await
    }

    pub async fn call_hold_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Delete, "hold", "call/calls/<call-id>/hold", None).await
    }

    pub async fn call_mute_on(&self, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        let body = json(&Mute { direction })?;
        self.call_toggle(call_id, RequestMethod::Post, "mute", "call/calls/<call-id>/mute", body).await
    }

    pub async fn call_mute_off(&self, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        let body = json(&Mute { direction })?;
        self.call_toggle(call_id, RequestMethod::Delete, "mute", "call/calls/<call-id>/mute", body).await
    }

    pub async fn call_moh_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Post, "moh", "call/calls/<call-id>/moh", None).await
    }

    pub async fn call_moh_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Delete, "moh", "call/calls/<call-id>/moh", None).await
    }

    pub async fn call_silence_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Post, "silence", "call/calls/<call-id>/silence", None).await
    }

    pub async fn call_silence_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, RequestMethod::Delete, "silence", "call/calls/<call-id>/silence", None).await
    }

    // POST switches a call feature on, DELETE switches it off.
    async fn call_toggle(
        &self,
        call_id: Uuid,
        method: RequestMethod,
        feature: &str,
        resource: &'static str,
        body: Option<Bytes>,
    ) -> Result<()> {
        self.execute(
            Route::new(Service::Call, method, format!("/v1/calls/{call_id}/{feature}"), resource),
            CallOpts::now(),
            body,
        )
        .await
    }
}
