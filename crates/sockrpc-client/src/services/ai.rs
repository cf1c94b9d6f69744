//! ai-manager: aicalls.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{CallOpts, RequestHandler, Route};
use crate::models::ai::Aicall;

impl RequestHandler {
    pub async fn ai_aicall_get(&self, aicall_id: Uuid) -> Result<Aicall> {
        self.fetch(
            Route::new(Service::Ai, RequestMethod::Get, format!("/v1/aicalls/{aicall_id}"), "ai/aicalls/<aicall-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Ask the ai-manager to terminate the aicall after `delay_ms`.
    pub async fn ai_aicall_terminate_with_delay(&self, aicall_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Ai,
                RequestMethod::Post,
                format!("/v1/aicalls/{aicall_id}/terminate"),
                "ai/aicalls/<aicall-id>/terminate",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }
}
