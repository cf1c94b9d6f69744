//! Response envelope.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::status::{error_for, StatusError};

/// Response envelope, owned by the caller that awaited it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: i32,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, with = "super::raw", skip_serializing_if = "Bytes::is_empty")]
    pub data: Bytes,
}

impl Response {
    /// Reply with a status code and no payload.
    pub fn status(status_code: i32) -> Self {
        Self {
            status_code,
            data_type: String::new(),
            data: Bytes::new(),
        }
    }

    /// Reply with a status code and a JSON payload.
    pub fn json(status_code: i32, data: impl Into<Bytes>) -> Self {
        Self {
            status_code,
            data_type: super::CONTENT_TYPE_JSON.to_string(),
            data: data.into(),
        }
    }

    /// The status sentinel for this reply, `None` on success.
    pub fn status_error(&self) -> Option<StatusError> {
        error_for(self.status_code)
    }
}
