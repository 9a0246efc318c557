//! Proxy JSON envelope: `{ "contents": "<html…>" }`.

use serde::Deserialize;

use super::FetchError;

/// Minimal envelope shape; other proxy fields are ignored.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Decodes the proxy response body and returns the wrapped page HTML.
pub(crate) fn decode_contents(body: &[u8]) -> Result<String, FetchError> {
    let envelope: ProxyEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.contents)
}
