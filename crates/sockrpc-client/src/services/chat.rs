//! chat-manager: chat rooms and their participants.

use uuid::Uuid;

use sockrpc_core::destination::Service;
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, page_uri, CallOpts, RequestHandler, Route};
use crate::models::chat::{Chat, ChatBasicInfo, ChatCreate, ChatType, ParticipantAdd, RoomOwnerUpdate};
use crate::models::Filters;

impl RequestHandler {
    pub async fn chat_create(
        &self,
        customer_id: Uuid,
        kind: ChatType,
        room_owner_id: Uuid,
        participant_ids: &[Uuid],
        name: &str,
        detail: &str,
    ) -> Result<Chat> {
        self.fetch(
            Route::new(Service::Chat, RequestMethod::Post, "/v1/chats", "chat/chats"),
            CallOpts::now(),
            json(&ChatCreate {
                customer_id,
                kind,
                room_owner_id,
                participant_ids,
                name,
                detail,
            })?,
        )
        .await
    }

    pub async fn chat_get(&self, chat_id: Uuid) -> Result<Chat> {
        self.fetch(
            Route::new(Service::Chat, RequestMethod::Get, format!("/v1/chats/{chat_id}"), "chat/chats/<chat-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn chat_list(&self, page_token: &str, page_size: u64, filters: &Filters) -> Result<Vec<Chat>> {
        self.fetch(
            Route::new(Service::Chat, RequestMethod::Get, page_uri("/v1/chats", page_token, page_size), "chat/chats"),
            self.list_opts(),
            json(filters)?,
        )
        .await
    }

    pub async fn chat_delete(&self, chat_id: Uuid) -> Result<Chat> {
        self.fetch(
            Route::new(Service::Chat, RequestMethod::Delete, format!("/v1/chats/{chat_id}"), "chat/chats/<chat-id>"),
            CallOpts::now(),
            None,
        )
        .await
    }

    pub async fn chat_update_basic_info(&self, chat_id: Uuid, name: &str, detail: &str) -> Result<Chat> {
        self.fetch(
            Route::new(Service::Chat, RequestMethod::Put, format!("/v1/chats/{chat_id}"), "chat/chats/<chat-id>"),
            CallOpts::now(),
            json(&ChatBasicInfo { name, detail })?,
        )
        .await
    }

    pub async fn chat_update_room_owner_id(&self, chat_id: Uuid, room_owner_id: Uuid) -> Result<Chat> {
        self.fetch(
            Route::new(
                Service::Chat,
                RequestMethod::Put,
                format!("/v1/chats/{chat_id}/room_owner_id"),
                "chat/chats/<chat-id>/room_owner_id",
            ),
            CallOpts::now(),
            json(&RoomOwnerUpdate { room_owner_id })?,
        )
        .await
    }

    pub async fn chat_add_participant_id(&self, chat_id: Uuid, participant_id: Uuid) -> Result<Chat> {
        self.fetch(
            Route::new(
                Service::Chat,
                RequestMethod::Post,
                format!("/v1/chats/{chat_id}/participant_ids"),
                "chat/chats/<chat-id>/participant_ids",
            ),
            CallOpts::now(),
            json(&ParticipantAdd { participant_id })?,
        )
        .await
    }

    pub async fn chat_remove_participant_id(&self, chat_id: Uuid, participant_id: Uuid) -> Result<Chat> {
        self.fetch(
            Route::new(
                Service::Chat,
                RequestMethod::Delete,
                format!("/v1/chats/{chat_id}/participant_ids/{participant_id}"),
                "chat/chats/<chat-id>/participant_ids/<participant-id>",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }
}
