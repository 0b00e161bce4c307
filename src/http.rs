use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, Response};
use serde_json::Value;

use crate::error::{Error, Result};

/// Transport layer for a MISP instance: owns the reqwest client and the
/// normalized base URL, injects the auth header, checks status. MISP
/// authenticates with the bare API key in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct MispHttp {
    client: Client,
    base_url: Arc<str>,
    api_key: Option<Arc<str>>,
}

impl MispHttp {
    pub fn new(
        base_url: impl Into<Arc<str>>,
        api_key: Option<Arc<str>>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|err| Error::Configuration(format!("http client build failed: {err}")))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(AUTHORIZATION, &**key);
        }
        req
    }

    pub async fn send_ok(
        &self,
        req: reqwest::RequestBuilder,
        context: &'static str,
    ) -> Result<Response> {
        let resp = req
            .send()
            .await
            .map_err(|source| Error::Transport { context, source })?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        Err(Error::Status {
            context,
            status,
            body: truncate_body_snippet(&text, 500),
        })
    }

    /// POSTs a JSON body and hands back the raw response bytes, leaving the
    /// body uninterpreted for the caller's own decode path.
    pub async fn post_bytes(
        &self,
        path: &str,
        body: &Value,
        context: &'static str,
    ) -> Result<Vec<u8>> {
        let req = self.request(Method::POST, path).json(body);
        let resp = self.send_ok(req, context).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| Error::Transport { context, source })?;
        Ok(bytes.to_vec())
    }
}

fn normalize_base_url(base_url: impl Into<Arc<str>>) -> Arc<str> {
    let base_url: Arc<str> = base_url.into();
    if base_url.ends_with('/') {
        Arc::<str>::from(base_url.trim_end_matches('/'))
    } else {
        base_url
    }
}

fn truncate_body_snippet(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Back off to a char boundary; the cut may land inside a multi-byte char.
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}
