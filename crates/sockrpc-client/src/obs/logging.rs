//! Tracing subscriber setup for processes embedding the client.

use sockrpc_core::error::{Result, SockRpcError};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place and return `Ok(false)`.
pub fn init() -> Result<bool> {
    init_with_default("info")
}

/// Like [`init`], with a fallback directive when `RUST_LOG` is unset.
pub fn init_with_default(default_directive: &str) -> Result<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| SockRpcError::Config(format!("invalid log filter: {e}")))?;

    Ok(fmt().with_env_filter(filter).try_init().is_ok())
}
