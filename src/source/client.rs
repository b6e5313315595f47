// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::SourceError;

/// Public GitHub REST API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Pinned REST API version
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Items requested per listing; only the first page is read
pub const PER_PAGE: u32 = 100;

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("github-sources/", env!("CARGO_PKG_VERSION"));

/// Thin GitHub REST client shared by the version sources
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    /// Creates a client for the public GitHub API
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Creates a client for another API root, such as GitHub Enterprise
    pub fn with_base_url(base_url: &str) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| SourceError::ApiRequest {
                context: "failed to build HTTP client".into(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/repos/{repo}/{endpoint}`
    fn endpoint_url(&self, repo: &str, endpoint: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            repo,
            endpoint
        )
    }

    /// Fetches the first page of a repository listing and decodes it
    pub async fn list<T: DeserializeOwned>(
        &self,
        repo: &str,
        endpoint: &str,
    ) -> Result<Vec<T>, SourceError> {
        let url = self.endpoint_url(repo, endpoint);
        debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", PER_PAGE)])
            .header(reqwest::header::ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| SourceError::ApiRequest {
                context: format!("GET {url}"),
                source,
            })?;

        let items: Vec<T> = response
            .json()
            .await
            .map_err(|source| SourceError::ApiResponse {
                context: format!("{endpoint} of {repo}"),
                source,
            })?;
        debug!(count = items.len(), %url, "fetched");

        Ok(items)
    }
}
