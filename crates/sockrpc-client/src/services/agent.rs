//! agent-manager: agents.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, query_uri, CallOpts, RequestHandler, Route};
use crate::models::agent::{Agent, AgentAddressesUpdate, AgentCreate, AgentStatus, AgentStatusUpdate, RingMethod};
use crate::models::{Address, CountReply, Filters};

impl RequestHandler {
    /// Create an agent. `timeout_ms` covers password hashing on the far side.
    #[allow(clippy::too_many_arguments)]
    pub async fn agent_create(
        &self,
        timeout_ms: u64,
        customer_id: Uuid,
        username: &str,
        password: &str,
        name: &str,
        detail: &str,
        ring_method: RingMethod,
        permission: u64,
        tag_ids: &[Uuid],
        addresses: &[Address],
    ) -> Result<Agent> {
        let body = json(&AgentCreate {
            customer_id,
            username,
            password,
            name,
            detail,
            ring_method,
            permission,
            tag_ids,
            addresses,
        })?;

        self.fetch(
            Route::new(Service::Agent, RequestMethod::Post, "/v1/agents", "agent/agents"),
            CallOpts::timeout(timeout_ms),
            body,
        )
        .await
    }

    pub async fn agent_get(&self, agent_id: Uuid) -> Result<Agent> {
        self.fetch(
            Route::new(Service::Agent, RequestMethod::Get, format!("/v1/agents/{agent_id}"), "agent/agents/<agent-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn agent_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Agent>> {
        self.fetch(
            Route::new(Service::Agent, RequestMethod::Get, page_uri("/v1/agents", page_token, page_size), "agent/agents"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn agent_delete(&self, agent_id: Uuid) -> Result<Agent> {
        self.fetch(
            Route::new(Service::Agent, RequestMethod::Delete, format!("/v1/agents/{agent_id}"), "agent/agents/<agent-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn agent_update_status(&self, agent_id: Uuid, status: AgentStatus) -> Result<Agent> {
        self.fetch(
            Route::new(
                Service::Agent,
                RequestMethod::Put,
                format!("/v1/agents/{agent_id}/status"),
                "agent/agents/<agent-id>/status",
            ),
            CallOpts::now(),
            json(&AgentStatusUpdate { status })?,
        )
        .await
    }

    pub async fn agent_update_addresses(&self, agent_id: Uuid, addresses: &[Address]) -> Result<Agent> {
        self.fetch(
            Route::new(
                Service::Agent,
                RequestMethod::Put,
                format!("/v1/agents/{agent_id}/addresses"),
                "agent/agents/<agent-id>/addresses",
            ),
            CallOpts::now(),
            json(&AgentAddressesUpdate { addresses })?,
        )
        .await
    }

    pub async fn agent_count_by_customer_id(&self, customer_id: Uuid) -> Result<u64> {
        let reply: CountReply = self
            .fetch(
                Route::new(
                    Service::Agent,
                    RequestMethod::Get,
                    query_uri("/v1/agents/count_by_customer", "customer_id", &customer_id.to_string()),
                    "agent/agents/count_by_customer",
                ),
                CallOpts::now(),
                None,
            )
            .await?;
        Ok(reply.count)
    }
}
