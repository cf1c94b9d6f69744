use serde::Deserialize;
use sockrpc_core::error::{Result, SockRpcError};
use sockrpc_core::protocol::REQUEST_TIMEOUT_DEFAULT;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    pub client: ClientSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl ClientConfig {
    /// Minimal valid config for `publisher`, all other fields defaulted.
    pub fn for_publisher(publisher: impl Into<String>) -> Self {
        Self {
            version: 1,
            client: ClientSection {
                publisher: publisher.into(),
                default_timeout_ms: default_timeout_ms(),
                list_timeout_ms: default_list_timeout_ms(),
            },
            metrics: MetricsSection::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SockRpcError::UnsupportedVersion);
        }

        self.client.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Stamped on every request as its publisher.
    pub publisher: String,

    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Timeout for list/paging calls.
    #[serde(default = "default_list_timeout_ms")]
    pub list_timeout_ms: u64,
}

impl ClientSection {
    pub fn validate(&self) -> Result<()> {
        if self.publisher.trim().is_empty() {
            return Err(SockRpcError::Config("client.publisher must not be empty".into()));
        }
        if !(100..=600000).contains(&self.default_timeout_ms) {
            return Err(SockRpcError::Config(
                "client.default_timeout_ms must be between 100 and 600000".into(),
            ));
        }
        if !(100..=600000).contains(&self.list_timeout_ms) {
            return Err(SockRpcError::Config(
                "client.list_timeout_ms must be between 100 and 600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    REQUEST_TIMEOUT_DEFAULT
}
fn default_list_timeout_ms() -> u64 {
    30000
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Prefix for every metric name; empty means none.
    #[serde(default)]
    pub namespace: String,
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.namespace.chars();
        let valid = match chars.next() {
            None => true,
            Some(c) => {
                (c.is_ascii_lowercase() || c == '_')
                    && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            }
        };
        if !valid {
            return Err(SockRpcError::Config(
                "metrics.namespace must match [a-z_][a-z0-9_]*".into(),
            ));
        }
        Ok(())
    }
}
