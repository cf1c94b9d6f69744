//! queue-manager: queues and queuecalls.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, query_uri, CallOpts, RequestHandler, Route};
use crate::models::queue::{Queue, Queuecall};
use crate::models::{CountReply, Filters};

impl RequestHandler {
    pub async fn queue_get(&self, queue_id: Uuid) -> Result<Queue> {
        self.fetch(
            Route::new(Service::Queue, RequestMethod::Get, format!("/v1/queues/{queue_id}"), "queue/queues/<queue-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn queue_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Queue>> {
        self.fetch(
            Route::new(Service::Queue, RequestMethod::Get, page_uri("/v1/queues", page_token, page_size), "queue/queues"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    /// Kick the queue's dispatch loop after `delay_ms`.
    pub async fn queue_execute_run(&self, queue_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Queue,
                RequestMethod::Post,
                format!("/v1/queues/{queue_id}/execute_run"),
                "queue/queues/<queue-id>/execute_run",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }

    pub async fn queue_count_by_customer_id(&self, customer_id: Uuid) -> Result<u64> {
        let reply: CountReply = self
            .fetch(
                Route::new(
                    Service::Queue,
                    RequestMethod::Get,
                    query_uri("/v1/queues/count_by_customer", "customer_id", &customer_id.to_string()),
                    "queue/queues/count_by_customer",
                ),
                CallOpts::now(),
                None,
            )
            .await?;
        Ok(reply.count)
    }

    pub async fn queue_queuecall_get(&self, queuecall_id: Uuid) -> Result<Queuecall> {
        self.fetch(
            Route::new(
                Service::Queue,
                RequestMethod::Get,
                format!("/v1/queuecalls/{queuecall_id}"),
                "queue/queuecalls/<queuecall-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn queue_queuecall_kick(&self, queuecall_id: Uuid) -> Result<Queuecall> {
        self.fetch(
            Route::new(
                Service::Queue,
                RequestMethod::Post,
                format!("/v1/queuecalls/{queuecall_id}/kick"),
                "queue/queuecalls/<queuecall-id>/kick",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Expire the queuecall's wait after `delay_ms`.
    pub async fn queue_queuecall_timeout_wait(&self, queuecall_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Queue,
                RequestMethod::Post,
                format!("/v1/queuecalls/{queuecall_id}/timeout_wait"),
                "queue/queuecalls/<queuecall-id>/timeout_wait",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }
}
