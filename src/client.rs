use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::MispHttp;
use crate::response::decode_search_response;
use crate::search::SearchRequest;
use crate::types::SearchResult;

pub const SEARCH_PATH: &str = "/events/restSearch/download";

/// MISP API client. Cheap to clone; clones share the underlying connection
/// pool and nothing else.
#[derive(Debug, Clone)]
pub struct Client {
    http: MispHttp,
}

impl Client {
    /// Fails with a configuration error when the base URL is missing.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = MispHttp::new(
            config.base_url.as_str(),
            config.api_key.as_deref().map(Arc::from),
            config.http_timeout(),
        )?;
        Ok(Self { http })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Runs one event search: wraps the criteria under the outer `request`
    /// key, POSTs, and decodes the response envelope. One exchange per
    /// call; transport failures propagate verbatim, nothing is retried.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        let body = serde_json::json!({ "request": request.wire_body() });
        debug!(path = SEARCH_PATH, "issuing event search");

        let raw = self
            .http
            .post_bytes(SEARCH_PATH, &body, "misp search request")
            .await?;
        decode_search_response(&raw)
    }
}
