//! Transport Layer
//!
//! The HTTP seam. The client only needs a GET that hands back status and
//! body; tests swap in canned responses.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Longest error page body kept for diagnostics, in chars
pub const MAX_ERROR_BODY: usize = 1024;

/// What the client needs from a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues plain GET requests: no headers, no body, no query
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Fails only when no response was received at all
    async fn get(&self, url: &str) -> FetchResult<RawResponse>;
}

/// `reqwest`-backed transport (browser fetch on wasm32, hyper elsewhere)
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> FetchResult<RawResponse> {
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = if status.is_success() {
            resp.text().await?
        } else {
            // Status alone decides the error; the body only adds context
            let body = resp.text().await.unwrap_or_default();
            truncate_chars(body, MAX_ERROR_BODY)
        };
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn truncate_chars(mut body: String, max: usize) -> String {
    if let Some((idx, _)) = body.char_indices().nth(max) {
        body.truncate(idx);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate_chars("héllo".to_string(), 2), "hé");
        assert_eq!(truncate_chars("short".to_string(), 10), "short");
    }
}
