//! conference-manager: conferences.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::conference::Conference;
use crate::models::Filters;

/// Listing conferences walks their calls on the far side.
const CONFERENCE_LIST_TIMEOUT_MS: u64 = 30_000;

impl RequestHandler {
    pub async fn conference_get(&self, conference_id: Uuid) -> Result<Conference> {
        self.fetch(
            Route::new(
                Service::Conference,
                RequestMethod::Get,
                format!("/v1/conferences/{conference_id}"),
                "conference/conferences/<conference-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn conference_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Conference>> {
        self.fetch(
            Route::new(
                Service::Conference,
                RequestMethod::Get,
                page_uri("/v1/conferences", page_token, page_size),
                "conference/conferences",
            ),
            CallOpts::timeout(CONFERENCE_LIST_TIMEOUT_MS),
            json(filters)?,
        )
        .await
    }

    /// Delete the conference after `delay_ms`.
    pub async fn conference_delete_delay(&self, conference_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Conference,
                RequestMethod::Delete,
                format!("/v1/conferences/{conference_id}"),
                "conference/conferences/<conference-id>",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }

    /// Stop the conference, optionally after `delay_ms`.
    pub async fn conference_stop(&self, conference_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Conference,
                RequestMethod::Post,
                format!("/v1/conferences/{conference_id}/stop"),
                "conference/conferences/<conference-id>/stop",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }

    pub async fn conference_recording_start(&self, conference_id: Uuid) -> Result<Conference> {
        self.fetch(
            Route::new(
                Service::Conference,
                RequestMethod::Post,
                format!("/v1/conferences/{conference_id}/recording_start"),
                "conference/conferences/<conference-id>/recording_start",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }
}
