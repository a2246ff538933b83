//! HTTP Access
//!
//! Minimal GET capability used by the remote fetch demo.

use async_trait::async_trait;

/// Failure of a remote request, shown to the user via `Display`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("Failed to fetch users")]
    Status(u16),
    /// Request never produced a response
    #[error("Failed to fetch users: {0}")]
    Transport(String),
    /// Body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// GET returning the response body of a successful response
#[async_trait(?Send)]
pub trait HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttp;

#[async_trait(?Send)]
impl HttpClient for BrowserHttp {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
