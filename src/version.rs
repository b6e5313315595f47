// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::SourceError;

/// One discrete version of a piece of software
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Version string, usually a tag or release name
    pub version: String,
    /// When the version was published, if upstream knows
    pub release_datetime: Option<DateTime<Utc>>,
}

impl Version {
    /// Creates a new version
    ///
    /// # Arguments
    /// * `version` - Non-empty version string
    /// * `release_datetime` - Optional publish time
    ///
    /// # Returns
    /// * `Err(SourceError::EmptyVersion)` if `version` is empty
    pub fn new(
        version: impl Into<String>,
        release_datetime: Option<DateTime<Utc>>,
    ) -> Result<Self, SourceError> {
        let version = version.into();
        if version.is_empty() {
            return Err(SourceError::EmptyVersion);
        }
        Ok(Self {
            version,
            release_datetime,
        })
    }
}
