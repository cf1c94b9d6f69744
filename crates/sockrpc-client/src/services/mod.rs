//! Per-service façades.
//!
//! Each module is an `impl RequestHandler` block: build the uri and body,
//! pick the service queue, then `fetch` or `execute`. Service queue names come
//! from the `Service` manifest in the core crate.

pub mod agent;
pub mod ai;
pub mod asterisk;
pub mod billing;
pub mod call;
pub mod campaign;
pub mod chat;
pub mod conference;
pub mod customer;
pub mod flow;
pub mod number;
pub mod outdial;
pub mod queue;
pub mod registrar;
pub mod talk;
pub mod transcribe;
pub mod tts;
pub mod webhook;
