//! number-manager: numbers.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::number::{Number, RenewByDays};
use crate::models::Filters;

impl RequestHandler {
    pub async fn number_get(&self, number_id: Uuid) -> Result<Number> {
        self.fetch(
            Route::new(Service::Number, RequestMethod::Get, format!("/v1/numbers/{number_id}"), "number/numbers/<number-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn number_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Number>> {
        self.fetch(
            Route::new(Service::Number, RequestMethod::Get, page_uri("/v1/numbers", page_token, page_size), "number/numbers"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    /// Renew every number whose renewal is older than `days`; returns the renewed ones.
    pub async fn number_renew_by_days(&self, days: u32) -> Result<Vec<Number>> {
        self.fetch(
            Route::new(Service::Number, RequestMethod::Post, "/v1/numbers/renew", "number/numbers/renew"),
            CallOpts::now(),
            json(&RenewByDays { days })?,
        )
        .await
    }
}
