//! Reply status code -> error sentinel mapping.
//!
//! Status codes follow HTTP semantics but never cross an HTTP stack; they are
//! only the failure vocabulary between a client and the downstream services.
//! Codes from 0 to 299 are success. Known failure codes map to a fixed variant
//! so callers branch on identity (`== StatusError::NotFound`) instead of text.
//! Negative codes are never produced by a well-behaved service and map to
//! [`StatusError::Unknown`].

use thiserror::Error;

/// Error sentinel for a failure status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StatusError {
    #[error("bad request")]
    BadRequest,
    #[error("unauthorized")]
    Unauthorized,
    #[error("payment required")]
    PaymentRequired,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("not acceptable")]
    NotAcceptable,
    #[error("proxy authentication required")]
    ProxyAuthRequired,
    #[error("request timeout")]
    RequestTimeout,
    #[error("conflict")]
    Conflict,
    #[error("gone")]
    Gone,
    #[error("length required")]
    LengthRequired,
    #[error("precondition failed")]
    PreconditionFailed,
    #[error("request entity too large")]
    RequestEntityTooLarge,
    #[error("request uri too long")]
    RequestUriTooLong,
    #[error("unsupported media type")]
    UnsupportedMediaType,
    #[error("requested range not satisfiable")]
    RequestedRangeNotSatisfiable,
    #[error("expectation failed")]
    ExpectationFailed,
    #[error("i'm a teapot")]
    Teapot,
    #[error("misdirected request")]
    MisdirectedRequest,
    #[error("unprocessable entity")]
    UnprocessableEntity,
    #[error("locked")]
    Locked,
    #[error("failed dependency")]
    FailedDependency,
    #[error("too early")]
    TooEarly,
    #[error("upgrade required")]
    UpgradeRequired,
    #[error("precondition required")]
    PreconditionRequired,
    #[error("too many requests")]
    TooManyRequests,
    #[error("request header fields too large")]
    RequestHeaderFieldsTooLarge,
    #[error("unavailable for legal reasons")]
    UnavailableForLegalReasons,
    #[error("internal server error")]
    InternalServerError,
    #[error("not implemented")]
    NotImplemented,
    #[error("bad gateway")]
    BadGateway,
    #[error("service unavailable")]
    ServiceUnavailable,
    #[error("gateway timeout")]
    GatewayTimeout,
    #[error("http version not supported")]
    HttpVersionNotSupported,
    #[error("variant also negotiates")]
    VariantAlsoNegotiates,
    #[error("insufficient storage")]
    InsufficientStorage,
    #[error("loop detected")]
    LoopDetected,
    #[error("not extended")]
    NotExtended,
    #[error("network authentication required")]
    NetworkAuthenticationRequired,
    /// Failure code outside the table; keeps the code for diagnosis.
    #[error("unknown status code: {0}")]
    Unknown(i32),
}

/// Every mapped failure code, in ascending order.
pub const KNOWN_STATUS: &[(i32, StatusError)] = &[
    (400, StatusError::BadRequest),
    (401, StatusError::Unauthorized),
    (402, StatusError::PaymentRequired),
    (403, StatusError::Forbidden),
    (404, StatusError::NotFound),
    (405, StatusError::MethodNotAllowed),
    (406, StatusError::NotAcceptable),
    (407, StatusError::ProxyAuthRequired),
    (408, StatusError::RequestTimeout),
    (409, StatusError::Conflict),
    (410, StatusError::Gone),
    (411, StatusError::LengthRequired),
    (412, StatusError::PreconditionFailed),
    (413, StatusError::RequestEntityTooLarge),
    (414, StatusError::RequestUriTooLong),
    (415, StatusError::UnsupportedMediaType),
    (416, StatusError::RequestedRangeNotSatisfiable),
    (417, StatusError::ExpectationFailed),
    (418, StatusError::Teapot),
    (421, StatusError::MisdirectedRequest),
    (422, StatusError::UnprocessableEntity),
    (423, StatusError::Locked),
    (424, StatusError::FailedDependency),
    (425, StatusError::TooEarly),
    (426, StatusError::UpgradeRequired),
    (428, StatusError::PreconditionRequired),
    (429, StatusError::TooManyRequests),
    (431, StatusError::RequestHeaderFieldsTooLarge),
    (451, StatusError::UnavailableForLegalReasons),
    (500, StatusError::InternalServerError),
    (501, StatusError::NotImplemented),
    (502, StatusError::BadGateway),
    (503, StatusError::ServiceUnavailable),
    (504, StatusError::GatewayTimeout),
    (505, StatusError::HttpVersionNotSupported),
    (506, StatusError::VariantAlsoNegotiates),
    (507, StatusError::InsufficientStorage),
    (508, StatusError::LoopDetected),
    (510, StatusError::NotExtended),
    (511, StatusError::NetworkAuthenticationRequired),
];

/// Translate a reply status code into its error sentinel.
///
/// Returns `None` for success codes (0..300).
pub fn error_for(code: i32) -> Option<StatusError> {
    if (0..300).contains(&code) {
        return None;
    }

    let mapped = KNOWN_STATUS
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .and_then(|i| KNOWN_STATUS.get(i))
        .map(|(_, e)| *e);

    Some(mapped.unwrap_or(StatusError::Unknown(code)))
}

impl StatusError {
    /// The status code this sentinel stands for.
    pub fn code(self) -> i32 {
        if let StatusError::Unknown(c) = self {
            return c;
        }
        KNOWN_STATUS
            .iter()
            .find(|(_, e)| *e == self)
            .map(|(c, _)| *c)
            .unwrap_or(0)
    }

    /// Whether this is the generic fallback for an unmapped code.
    pub fn is_unknown(self) -> bool {
        matches!(self, StatusError::Unknown(_))
    }
}
