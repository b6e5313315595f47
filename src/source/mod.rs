// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Software, Version};

pub use client::GithubClient;
pub use releases::GithubReleasesSource;
pub use tags::GithubTagsSource;

pub mod client;
pub mod releases;
pub mod tags;

/// Common trait implemented by all version sources
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// The software this source was bound to
    fn software(&self) -> &Software;

    /// Fetches all available versions, in upstream order
    async fn get_all_versions(&self) -> Result<Vec<Version>, SourceError>;
}

/// Errors that can occur when fetching versions
#[derive(Error, Debug)]
pub enum SourceError {
    /// The software has no usable `github_repository` entry
    #[error("invalid repository given for {0}")]
    InvalidRepository(String),

    /// The API base URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No source exists with this name
    #[error("unknown source kind: {0}")]
    UnknownKind(String),

    /// Failed to fetch data from the API
    #[error("API request failed: {context}")]
    ApiRequest {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to parse data received from the API
    #[error("failed to parse API response: {context}")]
    ApiResponse {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream supplied an empty version string
    #[error("empty version string")]
    EmptyVersion,
}

/// Which GitHub listing a source reads versions from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Releases,
    Tags,
}

impl FromStr for SourceKind {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "releases" => Ok(Self::Releases),
            "tags" => Ok(Self::Tags),
            _ => Err(SourceError::UnknownKind(s.to_string())),
        }
    }
}

/// Builds the version source for `kind`, bound to `software`
pub fn from_kind(
    kind: SourceKind,
    software: Software,
    client: GithubClient,
) -> Box<dyn VersionSource> {
    match kind {
        SourceKind::Releases => Box::new(GithubReleasesSource::new(software, client)),
        SourceKind::Tags => Box::new(GithubTagsSource::new(software, client)),
    }
}
