use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::types::SearchResult;

/// Outer wrapper around every search response. The payload stays
/// uninterpreted until the envelope itself has parsed.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    response: Box<RawValue>,
}

/// Decodes a raw search response in two stages: envelope first, then the
/// event array. Each stage fails on its own error kind so callers can tell
/// a broken wrapper (`Error::Envelope`) from broken events
/// (`Error::Payload`). Whole-or-nothing: there is no partial result.
pub fn decode_search_response(raw: &[u8]) -> Result<Vec<SearchResult>> {
    let envelope: ResponseEnvelope = serde_json::from_slice(raw).map_err(Error::Envelope)?;
    let results: Vec<SearchResult> =
        serde_json::from_str(envelope.response.get()).map_err(Error::Payload)?;
    Ok(results)
}
