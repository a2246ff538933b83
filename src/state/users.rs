//! Remote Users Loading
//!
//! One GET per mount. Every attempt publishes `Loading` first and then
//! exactly one of `Ready` / `Failed`, so the panel cannot stay stuck loading.

use crate::models::GithubUser;
use crate::platform::{FetchError, HttpClient};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Ready(Vec<GithubUser>),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Fetch `url`, keep at most `limit` users and report each state change.
pub async fn load_users<C>(client: &C, url: &str, limit: usize, mut on_state: impl FnMut(FetchState))
where
    C: HttpClient + ?Sized,
{
    on_state(FetchState::Loading);

    let next = match fetch_users(client, url).await {
        Ok(mut users) => {
            log::debug!("[users] fetched {} users from {}", users.len(), url);
            users.truncate(limit);
            FetchState::Ready(users)
        }
        Err(e) => {
            log::warn!("[users] request to {} failed: {:?}", url, e);
            FetchState::Failed(e.to_string())
        }
    };
    on_state(next);
}

async fn fetch_users<C>(client: &C, url: &str) -> Result<Vec<GithubUser>, FetchError>
where
    C: HttpClient + ?Sized,
{
    let body = client.get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
