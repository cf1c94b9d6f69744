//! Axum router for the ops endpoints.
//!
//! The hosting service mounts or merges it into its own router.

use axum::{routing::get, Router};

use crate::{handler::RequestHandler, ops};

pub fn build_ops_router(handler: RequestHandler) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(handler)
}
