//! Shared error type across sockrpc crates.

use thiserror::Error;

use crate::protocol::RequestMethod;
use crate::status::StatusError;

/// Stable error classification, independent of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request payload could not be built.
    Construction,
    /// Publish failed or the reply never made it back.
    Transport,
    /// No reply within the request timeout.
    Timeout,
    /// Delayed publish could not be scheduled.
    Schedule,
    /// Downstream service answered with a failure status code.
    Status,
    /// Reply payload did not match the expected shape.
    Decode,
    /// Invalid client configuration.
    Config,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Construction => "construction",
            ErrorKind::Transport => "transport",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Schedule => "schedule",
            ErrorKind::Status => "status",
            ErrorKind::Decode => "decode",
            ErrorKind::Config => "config",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Failure reported by a transport implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no consumer for queue: {0}")]
    Unreachable(String),
    #[error("reply channel dropped")]
    ReplyDropped,
    #[error("publish failed: {0}")]
    Publish(String),
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SockRpcError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum SockRpcError {
    #[error("could not marshal the request: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("could not send the request. queue: {queue}, method: {method}, uri: {uri}: {source}")]
    Transport {
        queue: String,
        method: RequestMethod,
        uri: String,
        #[source]
        source: TransportError,
    },

    #[error("request timed out after {timeout_ms}ms. queue: {queue}, method: {method}, uri: {uri}")]
    Timeout {
        queue: String,
        method: RequestMethod,
        uri: String,
        timeout_ms: u64,
    },

    #[error("could not send the delayed request. queue: {queue}, method: {method}, uri: {uri}: {source}")]
    Schedule {
        queue: String,
        method: RequestMethod,
        uri: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error("could not decode the response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("unsupported config version")]
    UnsupportedVersion,

    #[error("internal: {0}")]
    Internal(String),
}

impl SockRpcError {
    /// Map the error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SockRpcError::Marshal(_) => ErrorKind::Construction,
            SockRpcError::Transport { .. } => ErrorKind::Transport,
            SockRpcError::Timeout { .. } => ErrorKind::Timeout,
            SockRpcError::Schedule { .. } => ErrorKind::Schedule,
            SockRpcError::Status(_) => ErrorKind::Status,
            SockRpcError::Decode(_) => ErrorKind::Decode,
            SockRpcError::Config(_) | SockRpcError::UnsupportedVersion => ErrorKind::Config,
            SockRpcError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The status sentinel, if this error came from a reply status code.
    pub fn status(&self) -> Option<StatusError> {
        match self {
            SockRpcError::Status(s) => Some(*s),
            _ => None,
        }
    }
}
