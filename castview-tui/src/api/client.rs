use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult};
use castview_types::*;

/// Every request carries a bounded timeout; expiry surfaces as a network
/// error on the normal fetch-failure path.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Farcaster aggregation API (profile lookup, feed,
/// reactions and follow endpoints).
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> ApiResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Helper to add the API key header when one is configured
    fn add_api_key(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(key) = &self.api_key {
            req.header("api_key", key)
        } else {
            req
        }
    }

    /// Helper to handle API responses
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // Clean up HTML error messages (e.g., from gateway error pages)
            let clean_error = if error_text.contains("<html>") || error_text.contains("<!DOCTYPE") {
                format!(
                    "Server returned {} error. Please check the server URL.",
                    status.as_u16()
                )
            } else {
                error_text
            };

            match status.as_u16() {
                404 => Err(ApiError::NotFound(clean_error)),
                401 | 403 => Err(ApiError::Unauthorized(clean_error)),
                400 => Err(ApiError::BadRequest(clean_error)),
                429 => Err(ApiError::RateLimited(clean_error)),
                _ => Err(ApiError::Api(clean_error)),
            }
        }
    }

    // User lookup endpoints

    /// Look up a profile by its current username.
    pub async fn lookup_user_by_username(&self, username: &str) -> ApiResult<Profile> {
        let url = format!(
            "{}/user/by_username?username={}",
            self.base_url,
            urlencoding::encode(username)
        );
        let req = self.add_api_key(self.client.get(&url));
        let response = req.send().await?;
        let user_response: UserResponse = self.handle_response(response).await?;
        Ok(user_response.user)
    }

    /// Look up profiles by fid, with interaction state computed for the
    /// given viewer.
    pub async fn lookup_users_by_fids(
        &self,
        fids: &[u64],
        viewer_fid: u64,
    ) -> ApiResult<Vec<Profile>> {
        let fid_list = fids
            .iter()
            .map(|fid| fid.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/user/bulk?fids={}&viewer_fid={}",
            self.base_url, fid_list, viewer_fid
        );
        let req = self.add_api_key(self.client.get(&url));
        let response = req.send().await?;
        let bulk: BulkUsersResponse = self.handle_response(response).await?;
        Ok(bulk.users)
    }

    // Feed endpoints

    /// Fetch casts authored by the given fids, most recent first.
    pub async fn fetch_feed_by_authors(
        &self,
        fids: &[u64],
        with_recasts: bool,
        limit: u32,
    ) -> ApiResult<Vec<Cast>> {
        let fid_list = fids
            .iter()
            .map(|fid| fid.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/feed?filter_type=fids&fids={}&with_recasts={}&limit={}",
            self.base_url, fid_list, with_recasts, limit
        );
        let req = self.add_api_key(self.client.get(&url));
        let response = req.send().await?;
        let feed: FeedResponse = self.handle_response(response).await?;
        Ok(feed.casts)
    }

    /// Fetch the casts a fid has liked, most recent like first. Each record
    /// wraps the liked cast.
    pub async fn fetch_liked_casts(&self, fid: u64, limit: u32) -> ApiResult<Vec<ReactionRecord>> {
        let url = format!(
            "{}/reactions/user?fid={}&type={}&limit={}",
            self.base_url,
            fid,
            ReactionKind::Like.as_query(),
            limit
        );
        let req = self.add_api_key(self.client.get(&url));
        let response = req.send().await?;
        let reactions: ReactionsResponse = self.handle_response(response).await?;
        Ok(reactions.reactions)
    }

    // Follow endpoints

    /// Follow a user on behalf of the configured viewer.
    pub async fn follow_user(&self, target_fid: u64) -> ApiResult<()> {
        let url = format!("{}/user/follow", self.base_url);
        let request = FollowRequest { target_fid };
        let req = self.add_api_key(self.client.post(&url).json(&request));
        let response = req.send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Unfollow a user on behalf of the configured viewer.
    pub async fn unfollow_user(&self, target_fid: u64) -> ApiResult<()> {
        let url = format!("{}/user/follow", self.base_url);
        let request = FollowRequest { target_fid };
        let req = self.add_api_key(self.client.delete(&url).json(&request));
        let response = req.send().await?;
        response.error_for_status()?;
        Ok(())
    }
}
