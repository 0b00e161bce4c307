use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the client. Decode failures keep the two envelope
/// stages apart so callers can tell a malformed wrapper from a malformed
/// event list.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context} status={status} body_sample={body}")]
    Status {
        context: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("response envelope invalid: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("search payload invalid: {0}")]
    Payload(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
