//! talk-manager: chat messages and reactions.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::talk::{Message, MessageCreate, MessageType, ReactionAdd};
use crate::models::Filters;

impl RequestHandler {
    /// Post a message to a chat; `parent_id` makes it a thread reply.
    pub async fn talk_message_create(
        &self,
        chat_id: Uuid,
        parent_id: Option<Uuid>,
        owner_type: &str,
        owner_id: Uuid,
        kind: MessageType,
        text: &str,
    ) -> Result<Message> {
        self.fetch(
            Route::new(Service::Talk, RequestMethod::Post, "/v1/messages", "talk/messages"),
            CallOpts::now(),
            json(&MessageCreate {
                chat_id,
                parent_id,
                owner_type,
                owner_id,
                kind,
                text,
            })?,
        )
        .await
    }

    pub async fn talk_message_get(&self, message_id: Uuid) -> Result<Message> {
        self.fetch(
            Route::new(
                Service::Talk,
                RequestMethod::Get,
                format!("/v1/messages/{message_id}"),
                "talk/messages/<message-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn talk_message_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Message>> {
        self.fetch(
            Route::new(Service::Talk, RequestMethod::Get, page_uri("/v1/messages", page_token, page_size), "talk/messages"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn talk_message_delete(&self, message_id: Uuid) -> Result<Message> {
        self.fetch(
            Route::new(
                Service::Talk,
                RequestMethod::Delete,
                format!("/v1/messages/{message_id}"),
                "talk/messages/<message-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn talk_message_reaction_add(
        &self,
        message_id: Uuid,
        owner_type: &str,
        owner_id: Uuid,
        emoji: &str,
    ) -> Result<Message> {
        self.fetch(
            Route::new(
                Service::Talk,
                RequestMethod::Post,
                format!("/v1/messages/{message_id}/reactions"),
                "talk/messages/<message-id>/reactions",
            ),
            CallOpts::now(),
            json(&ReactionAdd {
                owner_type,
                owner_id,
                emoji,
            })?,
        )
        .await
    }
}
