//! customer-manager: customers.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, CallOpts, RequestHandler, Route};
use crate::models::billing::ReferenceType;
use crate::models::customer::{Customer, CustomerBalanceCheck};
use crate::models::ValidReply;

impl RequestHandler {
    pub async fn customer_get(&self, customer_id: Uuid) -> Result<Customer> {
        self.fetch(
            Route::new(
                Service::Customer,
                RequestMethod::Get,
                format!("/v1/customers/{customer_id}"),
                "customer/customers/<customer-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Whether the customer's billing account covers `count` units of `reference_type`.
    pub async fn customer_is_valid_balance(
        &self,
        customer_id: Uuid,
        reference_type: ReferenceType,
        country: &str,
        count: u32,
    ) -> Result<bool> {
        let reply: ValidReply = self
            .fetch(
                Route::new(
                    Service::Customer,
                    RequestMethod::Post,
                    format!("/v1/customers/{customer_id}/is_valid_balance"),
                    "customer/customers/<customer-id>/is_valid_balance",
                ),
                CallOpts::now(),
                json(&CustomerBalanceCheck {
                    reference_type,
                    country,
                    count,
                })?,
            )
            .await?;
        Ok(reply.valid)
    }
}
