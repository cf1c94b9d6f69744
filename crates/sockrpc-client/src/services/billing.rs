//! billing-manager: accounts and billings.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, CallOpts, RequestHandler, Route};
use crate::models::billing::{Account, BalanceChange, BalanceCheck, Billing, ReferenceType};
use crate::models::ValidReply;

impl RequestHandler {
    pub async fn billing_account_get(&self, account_id: Uuid) -> Result<Account> {
        self.fetch(
            Route::new(Service::Billing, RequestMethod::Get, format!("/v1/accounts/{account_id}"), "billing/accounts/<account-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Add to the balance regardless of payment state.
    pub async fn billing_account_add_balance_force(&self, account_id: Uuid, balance: f32) -> Result<Account> {
        self.fetch(
            Route::new(
                Service::Billing,
                RequestMethod::Post,
                format!("/v1/accounts/{account_id}/balance_add_force"),
                "billing/accounts/<account-id>/balance_add_force",
            ),
            CallOpts::now(),
            json(&BalanceChange { balance })?,
        )
        .await
    }

    /// Whether the account can afford `count` units of `billing_type` in `country`.
    pub async fn billing_account_is_valid_balance(
        &self,
        account_id: Uuid,
        billing_type: ReferenceType,
        country: &str,
        count: u32,
    ) -> Result<bool> {
        let reply: ValidReply = self
            .fetch(
                Route::new(
                    Service::Billing,
                    RequestMethod::Post,
                    format!("/v1/accounts/{account_id}/is_valid_balance"),
                    "billing/accounts/<account-id>/is_valid_balance",
                ),
                CallOpts::now(),
                json(&BalanceCheck {
                    billing_type,
                    country,
                    count,
                })?,
            )
            .await?;
        Ok(reply.valid)
    }

    pub async fn billing_get(&self, billing_id: Uuid) -> Result<Billing> {
        self.fetch(
            Route::new(Service::Billing, RequestMethod::Get, format!("/v1/billings/{billing_id}"), "billing/billings/<billing-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }
}
