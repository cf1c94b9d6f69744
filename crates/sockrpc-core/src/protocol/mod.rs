//! Wire envelopes exchanged over the request queues.
//!
//! - `Request`: uri + method + publisher tag + optional payload.
//! - `Response`: status code + optional payload.
//!
//! Payloads are opaque bytes in memory. On the wire they are embedded as raw
//! JSON (no re-encoding), so a transport can forward them untouched.

pub mod raw;
pub mod request;
pub mod response;

pub use request::{Request, RequestMethod};
pub use response::Response;

/// No payload.
pub const CONTENT_TYPE_NONE: &str = "";
/// Plain text payload.
pub const CONTENT_TYPE_TEXT: &str = "text/plain";
/// JSON payload.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Delay units, in milliseconds.
pub const DELAY_NOW: u64 = 0;
pub const DELAY_SECOND: u64 = 1000;
pub const DELAY_MINUTE: u64 = DELAY_SECOND * 60;
pub const DELAY_HOUR: u64 = DELAY_MINUTE * 60;

/// Default request timeout (ms).
pub const REQUEST_TIMEOUT_DEFAULT: u64 = 3000;
