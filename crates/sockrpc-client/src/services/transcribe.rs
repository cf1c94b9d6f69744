//! transcribe-manager: live transcriptions of calls and conferences.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::call::HealthCheck;
use crate::models::transcribe::{Transcribe, TranscribeDirection, TranscribeStart};
use crate::models::Filters;

impl RequestHandler {
    /// Start transcribing the referenced call or conference. Starting a
    /// speech-to-text session can be slow, so the caller picks the timeout.
    #[allow(clippy::too_many_arguments)]
    pub async fn transcribe_start(
        &self,
        timeout_ms: u64,
        customer_id: Uuid,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: &str,
        reference_id: Uuid,
        language: &str,
        direction: TranscribeDirection,
    ) -> Result<Transcribe> {
        self.fetch(
            Route::new(Service::Transcribe, RequestMethod::Post, "/v1/transcribes", "transcribe/transcribes"),
            CallOpts::timeout(timeout_ms),
            json(&TranscribeStart {
                customer_id,
                activeflow_id,
                on_end_flow_id,
                reference_type,
                reference_id,
                language,
                direction,
            })?,
        )
        .await
    }

    pub async fn transcribe_get(&self, transcribe_id: Uuid) -> Result<Transcribe> {
        self.fetch(
            Route::new(
                Service::Transcribe,
                RequestMethod::Get,
                format!("/v1/transcribes/{transcribe_id}"),
                "transcribe/transcribes/<transcribe-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn transcribe_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Transcribe>> {
        self.fetch(
            Route::new(
                Service::Transcribe,
                RequestMethod::Get,
                page_uri("/v1/transcribes", page_token, page_size),
                "transcribe/transcribes",
            ),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn transcribe_delete(&self, transcribe_id: Uuid) -> Result<Transcribe> {
        self.fetch(
            Route::new(
                Service::Transcribe,
                RequestMethod::Delete,
                format!("/v1/transcribes/{transcribe_id}"),
                "transcribe/transcribes/<transcribe-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn transcribe_stop(&self, transcribe_id: Uuid) -> Result<Transcribe> {
        self.fetch(
            Route::new(
                Service::Transcribe,
                RequestMethod::Post,
                format!("/v1/transcribes/{transcribe_id}/stop"),
                "transcribe/transcribes/<transcribe-id>/stop",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Schedule a health check of the transcription after `delay_ms`.
    pub async fn transcribe_health_check(&self, transcribe_id: Uuid, delay_ms: u64, retry_count: u32) -> Result<()> {
        self.execute(
            Route::new(
                Service::Transcribe,
                RequestMethod::Post,
                format!("/v1/transcribes/{transcribe_id}/health-check"),
                "transcribe/transcribes/<transcribe-id>/health-check",
            ),
            CallOpts::delayed(delay_ms),
            json(&HealthCheck { retry_count })?,
        )
        .await
    }
}
