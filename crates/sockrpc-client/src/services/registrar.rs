//! registrar-manager: SIP extensions.

use url::form_urlencoded;
use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, query_uri, CallOpts, RequestHandler, Route};
use crate::models::registrar::{Extension, ExtensionCreate, ExtensionUpdate};
use crate::models::{CountReply, Filters};

impl RequestHandler {
    pub async fn registrar_extension_create(
        &self,
        customer_id: Uuid,
        extension: &str,
        password: &str,
        name: &str,
        detail: &str,
    ) -> Result<Extension> {
        self.fetch(
            Route::new(Service::Registrar, RequestMethod::Post, "/v1/extensions", "registrar/extensions"),
            CallOpts::now(),
            json(&ExtensionCreate {
                customer_id,
                extension,
                password,
                name,
                detail,
            })?,
        )
        .await
    }

    pub async fn registrar_extension_get(&self, extension_id: Uuid) -> Result<Extension> {
        self.fetch(
            Route::new(
                Service::Registrar,
                RequestMethod::Get,
                format!("/v1/extensions/{extension_id}"),
                "registrar/extensions/<extension-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    /// Look an extension up by its number within a customer.
    pub async fn registrar_extension_get_by_extension(&self, customer_id: Uuid, extension: &str) -> Result<Extension> {
        let base = format!("/v1/extensions/extension/{}", encode_segment(extension));
        self.fetch(
            Route::new(
                Service::Registrar,
                RequestMethod::Get,
                query_uri(&base, "customer_id", &customer_id.to_string()),
                "registrar/extensions/extension/<extension>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn registrar_extension_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Extension>> {
        self.fetch(
            Route::new(
                Service::Registrar,
                RequestMethod::Get,
                page_uri("/v1/extensions", page_token, page_size),
                "registrar/extensions",
            ),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn registrar_extension_update(
        &self,
        extension_id: Uuid,
        name: &str,
        detail: &str,
        password: &str,
    ) -> Result<Extension> {
        self.fetch(
            Route::new(
                Service::Registrar,
                RequestMethod::Put,
                format!("/v1/extensions/{extension_id}"),
                "registrar/extensions/<extension-id>",
            ),
            CallOpts::now(),
            json(&ExtensionUpdate { name, detail, password })?,
        )
        .await
    }

    pub async fn registrar_extension_delete(&self, extension_id: Uuid) -> Result<Extension> {
        self.fetch(
            Route::new(
                Service::Registrar,
                RequestMethod::Delete,
                format!("/v1/extensions/{extension_id}"),
                "registrar/extensions/<extension-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn registrar_extension_count_by_customer_id(&self, customer_id: Uuid) -> Result<u64> {
        let reply: CountReply = self
            .fetch(
                Route::new(
                    Service::Registrar,
                    RequestMethod::Get,
                    query_uri("/v1/extensions/count_by_customer", "customer_id", &customer_id.to_string()),
                    "registrar/extensions/count_by_customer",
                ),
                CallOpts::now(),
                None,
            )
            .await?;
        Ok(reply.count)
    }
}

// Extension numbers may carry characters that are not path-safe.
fn encode_segment(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
