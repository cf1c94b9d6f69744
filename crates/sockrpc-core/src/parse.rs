//! Response parsing: status check first, then payload decode.
//!
//! The status code is always evaluated before the payload is touched, so a
//! failure reply with a garbage body reports its status error, never a decode
//! error.

use serde::de::DeserializeOwned;

use crate::error::{Result, SockRpcError};
use crate::protocol::Response;
use crate::status::error_for;

/// Apply the reply status contract and decode the payload into `dest`.
///
/// - `res == None` (nothing was awaited, e.g. a delayed send): `Ok(())`.
/// - failure status: the mapped [`StatusError`](crate::StatusError).
/// - `dest == None`: the caller does not want the payload; `Ok(())`.
/// - empty or `null` payload: `Ok(())`, `dest` is left as is.
/// - otherwise the payload is decoded as JSON into `*dest`.
///
/// `dest` must be a mutable reference. Handing over a value is rejected at
/// compile time:
///
/// ```compile_fail
/// use sockrpc_core::{parse_response, Response};
///
/// #[derive(serde::Deserialize)]
/// struct Agent { id: String }
///
/// let res = Response::json(200, r#"{"id":"a"}"#);
/// let agent = Agent { id: String::new() };
/// parse_response(Some(&res), Some(agent)).ok();
/// ```
pub fn parse_response<T: DeserializeOwned>(res: Option<&Response>, dest: Option<&mut T>) -> Result<()> {
    let Some(res) = res else {
        return Ok(());
    };

    if let Some(err) = error_for(res.status_code) {
        return Err(SockRpcError::Status(err));
    }

    let Some(dest) = dest else {
        return Ok(());
    };

    if is_absent(&res.data) {
        return Ok(());
    }

    *dest = serde_json::from_slice(&res.data).map_err(|e| {
        tracing::debug!(status = res.status_code, data_type = %res.data_type, error = %e, "response payload decode failed");
        SockRpcError::Decode(e)
    })?;
    Ok(())
}

// Whitespace only, or the JSON literal `null`.
fn is_absent(data: &[u8]) -> bool {
    let start = data.iter().position(|b| !b.is_ascii_whitespace());
    let end = data.iter().rposition(|b| !b.is_ascii_whitespace());
    match (start, end) {
        (Some(s), Some(e)) => data.get(s..=e) == Some(b"null".as_slice()),
        _ => true,
    }
}

/// Like [`parse_response`], but yields the decoded value.
///
/// Absent replies, empty payloads and `null` payloads decode to `T::default()`.
pub fn decode_response<T: DeserializeOwned + Default>(res: Option<&Response>) -> Result<T> {
    let mut out = T::default();
    parse_response(res, Some(&mut out))?;
    Ok(out)
}
