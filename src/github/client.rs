//! GitHub API client implementation

use crate::core::{VendorError, VendorResult};
use crate::di::traits::{ConfigProvider, ReleaseProvider};
use crate::github::types::GitHubRelease;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    has_token: bool,
    rate_limiter: Arc<RateLimiter>,
}

/// Rate limit state reported by the GitHub API
struct RateLimiter {
    remaining: Mutex<Option<u64>>,
    reset_time: Mutex<SystemTime>,
}

/// Build the HTTP client shared by API queries and archive downloads
pub(crate) fn build_http_client(
    config: &dyn ConfigProvider,
    headers: header::HeaderMap,
) -> VendorResult<HttpClient> {
    let mut builder = HttpClient::builder()
        .user_agent(concat!("vendorup/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers);

    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| VendorError::Config(format!("Failed to create HTTP client: {}", e)))
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &dyn ConfigProvider) -> VendorResult<Self> {
        let token = config.github_token();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(ref token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| VendorError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        Ok(Self {
            http_client: build_http_client(config, headers)?,
            api_url: config.github_api_url().trim_end_matches('/').to_string(),
            has_token: token.is_some(),
            rate_limiter: Arc::new(RateLimiter {
                remaining: Mutex::new(None),
                reset_time: Mutex::new(SystemTime::now()),
            }),
        })
    }

    /// Get the latest release for a repository
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> VendorResult<GitHubRelease> {
        let url = format!("{}/repos/{}/{}/releases/latest", self.api_url, owner, repo);
        tracing::debug!(%url, "querying latest release");
        self.api_get(&url).await
    }

    /// Make an API request and handle rate limiting
    async fn api_request(&self, url: &str) -> VendorResult<reqwest::Response> {
        self.check_rate_limit().await?;

        let response = self.http_client.get(url).send().await?;

        self.update_rate_limit(&response).await;

        if !response.status().is_success() {
            return Err(VendorError::Release(format!(
                "GitHub API error: HTTP {} for {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }

    /// Make an API GET request and parse the JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> VendorResult<T> {
        let response = self.api_request(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fail fast if the last response said the quota is used up
    async fn check_rate_limit(&self) -> VendorResult<()> {
        let remaining = *self.rate_limiter.remaining.lock().await;
        let reset_time = *self.rate_limiter.reset_time.lock().await;

        if remaining == Some(0) {
            let now = SystemTime::now();
            if now < reset_time {
                let wait_duration = reset_time.duration_since(now).unwrap_or(Duration::ZERO);
                return Err(VendorError::Release(format!(
                    "GitHub API rate limit exceeded. Reset in {} seconds. {}",
                    wait_duration.as_secs(),
                    if self.has_token {
                        ""
                    } else {
                        "Consider setting GITHUB_TOKEN to increase the rate limit."
                    }
                )));
            }
        }

        Ok(())
    }

    /// Update rate limit from response headers
    async fn update_rate_limit(&self, response: &reqwest::Response) {
        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            *self.rate_limiter.remaining.lock().await = Some(remaining);
        }

        if let Some(reset) = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            *self.rate_limiter.reset_time.lock().await =
                SystemTime::UNIX_EPOCH + Duration::from_secs(reset);
        }
    }
}

#[async_trait]
impl ReleaseProvider for GitHubClient {
    async fn get_latest_release(&self, owner: &str, repo: &str) -> VendorResult<GitHubRelease> {
        Self::get_latest_release(self, owner, repo).await
    }
}
