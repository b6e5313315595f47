// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{Software, Version};

use super::{GithubClient, SourceError, VersionSource};

/// A release as returned by `GET /repos/{repo}/releases`
#[derive(Debug, Deserialize)]
struct GithubRelease {
    /// Release title, may be empty
    name: String,
    #[serde(default)]
    tag_name: String,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

impl GithubRelease {
    /// Uses the release name, or the tag name when the release is untitled
    fn into_version(self) -> Result<Version, SourceError> {
        let version = if self.name.is_empty() {
            self.tag_name
        } else {
            self.name
        };
        Version::new(version, self.published_at)
    }
}

/// Reads versions from the GitHub releases of a repository
pub struct GithubReleasesSource {
    software: Software,
    client: GithubClient,
}

impl GithubReleasesSource {
    pub fn new(software: Software, client: GithubClient) -> Self {
        Self { software, client }
    }
}

#[async_trait]
impl VersionSource for GithubReleasesSource {
    fn software(&self) -> &Software {
        &self.software
    }

    async fn get_all_versions(&self) -> Result<Vec<Version>, SourceError> {
        let repo = self.software.github_repository()?;
        let releases: Vec<GithubRelease> = self.client.list(repo, "releases").await?;
        releases
            .into_iter()
            .map(GithubRelease::into_version)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(mock_server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/repos/cli/cli/releases"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(mock_server)
            .await;
    }

    fn source(mock_server: &MockServer) -> GithubReleasesSource {
        let software = Software::new("cli").with_info("github_repository", "cli/cli");
        let client = GithubClient::with_base_url(&mock_server.uri()).unwrap();
        GithubReleasesSource::new(software, client)
    }

    #[tokio::test]
    async fn test_release() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            json!([{"name": "v1.0", "tag_name": "v1.0", "published_at": "2023-01-01T00:00:00Z"}]),
        )
        .await;

        let versions = source(&mock_server).get_all_versions().await.unwrap();
        assert_eq!(
            versions,
            vec![Version {
                version: "v1.0".into(),
                release_datetime: Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_name_falls_back_to_tag() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            json!([
                {"name": "", "tag_name": "v1.0", "published_at": null},
                {"name": "", "tag_name": "v0.9"},
            ]),
        )
        .await;

        let versions = source(&mock_server).get_all_versions().await.unwrap();
        assert_eq!(
            versions,
            vec![
                Version::new("v1.0", None).unwrap(),
                Version::new("v0.9", None).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_name_preferred_over_tag() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            json!([{"name": "Spring Release", "tag_name": "v3.0", "published_at": null}]),
        )
        .await;

        let versions = source(&mock_server).get_all_versions().await.unwrap();
        assert_eq!(versions[0].version, "Spring Release");
    }

    #[tokio::test]
    async fn test_order_preserved() {
        let mock_server = MockServer::start().await;
        // Deliberately unsorted; no reordering must happen
        let names = ["v2.0", "v10.0", "v1.0", "v1.0", "v3.0-rc1"];
        let body: Vec<_> = names
            .iter()
            .map(|n| json!({"name": n, "tag_name": n}))
            .collect();
        serve(&mock_server, json!(body)).await;

        let versions = source(&mock_server).get_all_versions().await.unwrap();
        let got: Vec<&str> = versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(got, names);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, json!([])).await;

        let versions = source(&mock_server).get_all_versions().await.unwrap();
        assert!(versions.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_calls_fetch_again() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/cli/cli/releases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "v1.1", "tag_name": "v1.1", "published_at": "2024-03-05T10:20:30Z"},
            ])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let source = source(&mock_server);
        let first = source.get_all_versions().await.unwrap();
        let second = source.get_all_versions().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_invalid_repository_makes_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = GithubClient::with_base_url(&mock_server.uri()).unwrap();
        let invalid = [
            Software::new("missing"),
            Software::new("null").with_info("github_repository", serde_json::Value::Null),
            Software::new("number").with_info("github_repository", 7),
        ];
        for software in invalid {
            let source = GithubReleasesSource::new(software, client.clone());
            assert!(matches!(
                source.get_all_versions().await,
                Err(SourceError::InvalidRepository(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_missing_name_fails() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, json!([{"tag_name": "v1.0"}])).await;

        assert!(matches!(
            source(&mock_server).get_all_versions().await,
            Err(SourceError::ApiResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_bad_timestamp_fails() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            json!([{"name": "v1.0", "tag_name": "v1.0", "published_at": "yesterday"}]),
        )
        .await;

        assert!(matches!(
            source(&mock_server).get_all_versions().await,
            Err(SourceError::ApiResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_no_usable_name_fails_whole_call() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            json!([
                {"name": "v1.0", "tag_name": "v1.0"},
                {"name": "", "tag_name": ""},
            ]),
        )
        .await;

        assert!(matches!(
            source(&mock_server).get_all_versions().await,
            Err(SourceError::EmptyVersion)
        ));
    }
}
