use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a MISP instance. The base URL is required; the
/// API key is optional here and attached per-request by the transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub http_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Reads `MISP_URL`, `MISP_API_KEY` and `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url = env_required("MISP_URL")?;
        let api_key = env::var("MISP_API_KEY").ok().filter(|k| !k.trim().is_empty());
        Ok(Self {
            base_url,
            api_key,
            http_timeout_secs: env_u64("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Configuration(
                "base URL is required (set via ClientConfig or MISP_URL)".into(),
            ));
        }
        Ok(())
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_required(key: &str) -> Result<String> {
    let val = env::var(key).unwrap_or_default();
    if val.trim().is_empty() {
        return Err(Error::Configuration(format!("{key} is required")));
    }
    Ok(val)
}
