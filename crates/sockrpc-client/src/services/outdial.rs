//! outdial-manager: outdials and their dial targets.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::outdial::{
    Outdial, OutdialCreate, OutdialTarget, TargetCreate, TargetProgressing, TargetStatus, TargetStatusUpdate,
    DESTINATION_SLOTS,
};
use crate::models::{Address, Filters};

impl RequestHandler {
    pub async fn outdial_create(
        &self,
        customer_id: Uuid,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<Outdial> {
        self.fetch(
            Route::new(Service::Outdial, RequestMethod::Post, "/v1/outdials", "outdial/outdials"),
            CallOpts::now(),
            json(&OutdialCreate {
                customer_id,
                campaign_id,
                name,
                detail,
                data,
            })?,
        )
        .await
    }

    pub async fn outdial_get(&self, outdial_id: Uuid) -> Result<Outdial> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Get,
                format!("/v1/outdials/{outdial_id}"),
                "outdial/outdials/<outdial-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn outdial_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Outdial>> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Get,
                page_uri("/v1/outdials", page_token, page_size),
                "outdial/outdials",
            ),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn outdial_delete(&self, outdial_id: Uuid) -> Result<Outdial> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Delete,
                format!("/v1/outdials/{outdial_id}"),
                "outdial/outdials/<outdial-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Add a dial target. Empty destination slots are left out of the request.
    pub async fn outdial_target_create(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: [Option<&Address>; DESTINATION_SLOTS],
    ) -> Result<OutdialTarget> {
        let [destination_0, destination_1, destination_2, destination_3, destination_4] = destinations;
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Post,
                format!("/v1/outdials/{outdial_id}/targets"),
                "outdial/outdials/<outdial-id>/targets",
            ),
            CallOpts::now(),
            json(&TargetCreate {
                name,
                detail,
                data,
                destination_0,
                destination_1,
                destination_2,
                destination_3,
                destination_4,
            })?,
        )
        .await
    }

    pub async fn outdial_target_get(&self, target_id: Uuid) -> Result<OutdialTarget> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Get,
                format!("/v1/outdialtargets/{target_id}"),
                "outdial/outdialtargets/<outdialtarget-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn outdial_target_delete(&self, target_id: Uuid) -> Result<OutdialTarget> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Delete,
                format!("/v1/outdialtargets/{target_id}"),
                "outdial/outdialtargets/<outdialtarget-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn outdial_target_list_by_outdial(
        &self,
        outdial_id: Uuid,
        page_token: &str,
        page_size: u64,
    ) -> Result<Vec<OutdialTarget>> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Get,
                page_uri(&format!("/v1/outdials/{outdial_id}/targets"), page_token, page_size),
                "outdial/outdials/<outdial-id>/targets",
            ),
            self.list_opts(),
            None,
        )
        .await
    }

    /// Targets that can still be dialed: slot `i` has been tried fewer than
    /// `max_try_counts[i]` times.
    pub async fn outdial_target_get_available(
        &self,
        outdial_id: Uuid,
        max_try_counts: [u32; DESTINATION_SLOTS],
        limit: u64,
    ) -> Result<Vec<OutdialTarget>> {
        let [t0, t1, t2, t3, t4] = max_try_counts;
        let uri = format!(
            "/v1/outdials/{outdial_id}/available?try_count_0={t0}&try_count_1={t1}&try_count_2={t2}&try_count_3={t3}&try_count_4={t4}&limit={limit}"
        );
        self.fetch(
            Route::new(Service::Outdial, RequestMethod::Get, uri, "outdial/outdials/<outdial-id>/available"),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Mark the target as being dialed on destination slot `destination_index`.
    pub async fn outdial_target_update_progressing(&self, target_id: Uuid, destination_index: u32) -> Result<OutdialTarget> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Post,
                format!("/v1/outdialtargets/{target_id}/progressing"),
                "outdial/outdialtargets/<outdialtarget-id>/progressing",
            ),
            CallOpts::now(),
            json(&TargetProgressing { destination_index })?,
        )
        .await
    }

    pub async fn outdial_target_update_status(&self, target_id: Uuid, status: TargetStatus) -> Result<OutdialTarget> {
        self.fetch(
            Route::new(
                Service::Outdial,
                RequestMethod::Put,
                format!("/v1/outdialtargets/{target_id}/status"),
                "outdial/outdialtargets/<outdialtarget-id>/status",
            ),
            CallOpts::now(),
            json(&TargetStatusUpdate { status })?,
        )
        .await
    }
}
