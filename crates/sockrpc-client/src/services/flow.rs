//! flow-manager: activeflows and variables.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, CallOpts, RequestHandler, Route};
use crate::models::flow::{Activeflow, ActiveflowCreate, Substitute, SubstituteReply};

impl RequestHandler {
    /// Create an activeflow. A nil `activeflow_id` lets flow-manager pick one.
    pub async fn flow_activeflow_create(
        &self,
        activeflow_id: Uuid,
        customer_id: Uuid,
        flow_id: Uuid,
        reference_type: &str,
        reference_id: Uuid,
        reference_activeflow_id: Uuid,
    ) -> Result<Activeflow> {
        self.fetch(
            Route::new(Service::Flow, RequestMethod::Post, "/v1/activeflows", "flow/activeflows"),
            CallOpts::now(),
            json(&ActiveflowCreate {
                id: activeflow_id,
                customer_id,
                flow_id,
                reference_type,
                reference_id,
                reference_activeflow_id,
            })?,
        )
        .await
    }

    pub async fn flow_activeflow_execute(&self, activeflow_id: Uuid) -> Result<()> {
        self.execute(
            Route::new(
                Service::Flow,
                RequestMethod::Post,
                format!("/v1/activeflows/{activeflow_id}/execute"),
                "flow/activeflows/<activeflow-id>/execute",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn flow_activeflow_stop(&self, activeflow_id: Uuid) -> Result<Activeflow> {
        self.fetch(
            Route::new(
                Service::Flow,
                RequestMethod::Post,
                format!("/v1/activeflows/{activeflow_id}/stop"),
                "flow/activeflows/<activeflow-id>/stop",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Expand `${var}` references in `data` against the activeflow's variables.
    pub async fn flow_variable_substitute(&self, variable_id: Uuid, data: &str) -> Result<String> {
        let reply: SubstituteReply = self
            .fetch(
                Route::new(
                    Service::Flow,
                    RequestMethod::Post,
                    format!("/v1/variables/{variable_id}/substitute"),
                    "flow/variables/<variable-id>/substitute",
                ),
                CallOpts::now(),
                json(&Substitute { data })?,
            )
            .await?;
        Ok(reply.data)
    }
}
