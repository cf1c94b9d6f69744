//! Request envelope.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Request verb. Carried as a routing label; no HTTP stack is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request envelope. Built fresh per call and consumed by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Resource path, e.g. `/v1/agents/<id>/status`.
    pub uri: String,
    pub method: RequestMethod,
    /// Name of the process that sent the request.
    #[serde(default)]
    pub publisher: String,
    /// Payload content type (`""` when there is no payload).
    #[serde(default)]
    pub data_type: String,
    /// Opaque payload; empty means absent.
    #[serde(default, with = "super::raw", skip_serializing_if = "Bytes::is_empty")]
    pub data: Bytes,
}
