// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Version sources backed by the GitHub REST API.
//!
//! Two sources are provided, one reading repository releases and one reading
//! repository tags. Both find their repository through the
//! `github_repository` entry of a [`Software`]'s extra information.
//!
//! # Examples
//! ```no_run
//! use github_sources::{source::{GithubClient, GithubReleasesSource, VersionSource}, Software};
//! # async fn run() -> Result<(), github_sources::source::SourceError> {
//! let software = Software::new("cli").with_info("github_repository", "cli/cli");
//! let source = GithubReleasesSource::new(software, GithubClient::new()?);
//! for version in source.get_all_versions().await? {
//!     println!("{}", version.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod software;
pub mod source;
pub mod version;

pub use software::Software;
pub use version::Version;
