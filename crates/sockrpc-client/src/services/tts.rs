//! tts-manager: speeches and streaming sessions.
//!
//! Streaming sessions live on a single pod, so the `streaming_say_*` calls
//! go to that pod's queue instead of the shared one.

use uuid::Uuid;

use sockrpc_core::destination::{Destination, Service};
use sockrpc_core::error::Result;
use sockrpc_core::protocol::RequestMethod;

use crate::handler::{json, CallOpts, RequestHandler, Route};
use crate::models::tts::{Gender, SayAdd, SayInit, Speech, SpeechCreate, Streaming};

/// Synthesis of a full speech is slow.
const SPEECH_CREATE_TIMEOUT_MS: u64 = 60_000;

impl RequestHandler {
    pub async fn tts_speech_create(&self, call_id: Uuid, text: &str, gender: Gender, language: &str) -> Result<Speech> {
        self.fetch(
            Route::new(Service::Tts, RequestMethod::Post, "/v1/speeches", "tts/speeches"),
            CallOpts::timeout(SPEECH_CREATE_TIMEOUT_MS),
            json(&SpeechCreate {
                call_id,
                text,
                gender,
                language,
            })?,
        )
        .await
    }

    pub async fn tts_streaming_say_init(&self, pod_id: &str, streaming_id: Uuid, message_id: Uuid) -> Result<Streaming> {
        self.fetch(
            Route::new(
                Destination::pod(Service::Tts, pod_id),
                RequestMethod::Post,
                format!("/v1/streamings/{streaming_id}/say_init"),
                "tts/streamings/<streaming-id>/say_init",
            ),
            CallOpts::now(),
            json(&SayInit { message_id })?,
        )
        .await
    }

    pub async fn tts_streaming_say_add(&self, pod_id: &str, streaming_id: Uuid, message_id: Uuid, text: &str) -> Result<()> {
        self.execute(
            Route::new(
                Destination::pod(Service::Tts, pod_id),
                RequestMethod::Post,
                format!("/v1/streamings/{streaming_id}/say_add"),
                "tts/streamings/<streaming-id>/say_add",
            ),
            CallOpts::now(),
            json(&SayAdd { message_id, text })?,
        )
        .await
    }

    pub async fn tts_streaming_say_finish(&self, pod_id: &str, streaming_id: Uuid, message_id: Uuid) -> Result<Streaming> {
        self.fetch(
            Route::new(
                Destination::pod(Service::Tts, pod_id),
                RequestMethod::Post,
                format!("/v1/streamings/{streaming_id}/say_finish"),
                "tts/streamings/<streaming-id>/say_finish",
            ),
            CallOpts::now(),
            json(&SayInit { message_id })?,
        )
        .await
    }

    pub async fn tts_streaming_say_stop(&self, pod_id: &str, streaming_id: Uuid) -> Result<()> {
        self.execute(
            Route::new(
                Destination::pod(Service::Tts, pod_id),
                RequestMethod::Post,
                format!("/v1/streamings/{streaming_id}/say_stop"),
                "tts/streamings/<streaming-id>/say_stop",
            ),
            CallOpts::now(),
            None,
        )
        .await
    }
}
