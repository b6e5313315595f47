// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use async_trait::async_trait;
use serde::Deserialize;

use crate::{Software, Version};

use super::{GithubClient, SourceError, VersionSource};

/// A tag as returned by `GET /repos/{repo}/tags`
#[derive(Debug, Deserialize)]
struct GithubTag {
    name: String,
}

/// Reads versions from the GitHub tags of a repository
///
/// Tags carry no publish date, so `release_datetime` is always unset.
pub struct GithubTagsSource {
    software: Software,
    client: GithubClient,
}

impl GithubTagsSource {
    pub fn new(software: Software, client: GithubClient) -> Self {
        Self { software, client }
    }
}

#[async_trait]
impl VersionSource for GithubTagsSource {
    fn software(&self) -> &Software {
        &self.software
    }

    async fn get_all_versions(&self) -> Result<Vec<Version>, SourceError> {
        let repo = self.software.github_repository()?;
        let tags: Vec<GithubTag> = self.client.list(repo, "tags").await?;
        tags.into_iter()
            .map(|tag| Version::new(tag.name, None))
            .collect()
    }
}
