//! campaign-manager: campaigns and campaigncalls.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::campaign::{
    ActionsUpdate, Campaign, CampaignBasicInfo, CampaignCreate, CampaignResources, CampaignStatus, CampaignStatusUpdate,
    CampaignType, Campaigncall, EndHandle, NextCampaignUpdate, ServiceLevelUpdate,
};
use crate::models::flow::Action;
use crate::models::Filters;

impl RequestHandler {
    /// Create a campaign. A nil `campaign_id` lets the service pick one.
    #[allow(clippy::too_many_arguments)]
    pub async fn campaign_create(
        &self,
        campaign_id: Uuid,
        customer_id: Uuid,
        kind: CampaignType,
        name: &str,
        detail: &str,
        service_level: u32,
        end_handle: EndHandle,
        actions: &[Action],
        resources: CampaignResources,
    ) -> Result<Campaign> {
        self.fetch(
            Route::new(Service::Campaign, RequestMethod::Post, "/v1/campaigns", "campaign/campaigns"),
            CallOpts::now(),
            json(&CampaignCreate {
                id: campaign_id,
                customer_id,
                kind,
                name,
                detail,
                service_level,
                end_handle,
                actions,
                resources,
            })?,
        )
        .await
    }

    pub async fn campaign_get(&self, campaign_id: Uuid) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Get,
                format!("/v1/campaigns/{campaign_id}"),
                "campaign/campaigns/<campaign-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn campaign_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Campaign>> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Get,
                page_uri("/v1/campaigns", page_token, page_size),
                "campaign/campaigns",
            ),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn campaign_delete(&self, campaign_id: Uuid) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Delete,
                format!("/v1/campaigns/{campaign_id}"),
                "campaign/campaigns/<campaign-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Run one dialing round of the campaign after `delay_ms` (0 = now).
    pub async fn campaign_execute(&self, campaign_id: Uuid, delay_ms: u64) -> Result<()> {
        self.execute(
            Route::new(
                Service::Campaign,
                RequestMethod::Post,
                format!("/v1/campaigns/{campaign_id}/execute"),
                "campaign/campaigns/<campaign-id>/execute",
            ),
            CallOpts::delayed(delay_ms),
            None,
        )
        .await
    }

    pub async fn campaign_update_basic_info(
        &self,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        kind: CampaignType,
        service_level: u32,
        end_handle: EndHandle,
    ) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}"),
                "campaign/campaigns/<campaign-id>",
            ),
            CallOpts::now(),
            json(&CampaignBasicInfo {
                name,
                detail,
                kind,
                service_level,
                end_handle,
            })?,
        )
        .await
    }

    pub async fn campaign_update_status(&self, campaign_id: Uuid, status: CampaignStatus) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}/status"),
                "campaign/campaigns/<campaign-id>/status",
            ),
            CallOpts::now(),
            json(&CampaignStatusUpdate { status })?,
        )
        .await
    }

    pub async fn campaign_update_service_level(&self, campaign_id: Uuid, service_level: u32) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}/service_level"),
                "campaign/campaigns/<campaign-id>/service_level",
            ),
            CallOpts::now(),
            json(&ServiceLevelUpdate { service_level })?,
        )
        .await
    }

    pub async fn campaign_update_actions(&self, campaign_id: Uuid, actions: &[Action]) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}/actions"),
                "campaign/campaigns/<campaign-id>/actions",
            ),
            CallOpts::now(),
            json(&ActionsUpdate { actions })?,
        )
        .await
    }

    pub async fn campaign_update_resource_info(&self, campaign_id: Uuid, resources: CampaignResources) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}/resource_info"),
                "campaign/campaigns/<campaign-id>/resource_info",
            ),
            CallOpts::now(),
            json(&resources)?,
        )
        .await
    }

    pub async fn campaign_update_next_campaign_id(&self, campaign_id: Uuid, next_campaign_id: Uuid) -> Result<Campaign> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Put,
                format!("/v1/campaigns/{campaign_id}/next_campaign_id"),
                "campaign/campaigns/<campaign-id>/next_campaign_id",
            ),
            CallOpts::now(),
            json(&NextCampaignUpdate { next_campaign_id })?,
        )
        .await
    }

    pub async fn campaign_campaigncall_get(&self, campaigncall_id: Uuid) -> Result<Campaigncall> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Get,
                format!("/v1/campaigncalls/{campaigncall_id}"),
                "campaign/campaigncalls/<campaigncall-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn campaign_campaigncall_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &Filters,
    ) -> Result<Vec<Campaigncall>> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Get,
                page_uri("/v1/campaigncalls", page_token, page_size),
                "campaign/campaigncalls",
            ),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn campaign_campaigncall_delete(&self, campaigncall_id: Uuid) -> Result<Campaigncall> {
        self.fetch(
            Route::new(
                Service::Campaign,
                RequestMethod::Delete,
                format!("/v1/campaigncalls/{campaigncall_id}"),
                "campaign/campaigncalls/<campaigncall-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }
}
