//! Proxy page fetch.
//!
//! Third-party pages are retrieved through a CORS-style proxy that wraps
//! the raw HTML in a JSON envelope. Uses the curl crate (libcurl) with the
//! same redirect/timeout discipline as any other blocking transfer; callers
//! on async runtimes should wrap this in `spawn_blocking`.

mod envelope;

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::MediagrabConfig;

/// Failure fetching a page through the proxy. Hosts are expected to collapse
/// all variants into one undifferentiated user-facing message; the variants
/// exist for logging only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid proxy URL: {0}")]
    InvalidProxyUrl(String),
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    #[error("proxy returned HTTP {0}")]
    Status(u32),
    #[error("proxy envelope decode failed: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// Fetches `page_url` through the configured proxy and returns the raw HTML
/// text of the page.
pub fn fetch_page(cfg: &MediagrabConfig, page_url: &str) -> Result<String, FetchError> {
    let mut proxy = Url::parse(&cfg.proxy_url)
        .map_err(|_| FetchError::InvalidProxyUrl(cfg.proxy_url.clone()))?;
    proxy.query_pairs_mut().append_pair("url", page_url);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(proxy.as_str())?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status(code));
    }

    envelope::decode_contents(&body)
}
