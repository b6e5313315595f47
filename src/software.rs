// SPDX-FileCopyrightText: Copyright © 2025 AerynOS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Tracked software and its repository lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::source::SourceError;

/// Metadata key holding the `<owner>/<repo>` identifier
pub const GITHUB_REPOSITORY_KEY: &str = "github_repository";

/// A piece of software whose versions are tracked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Software {
    /// Display name
    pub name: String,

    /// Free-form metadata attached by the framework
    #[serde(default)]
    pub extra_information: HashMap<String, Value>,
}

impl Software {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra_information: HashMap::new(),
        }
    }

    /// Sets a metadata entry, returning the updated software
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_information.insert(key.into(), value.into());
        self
    }

    /// Returns the GitHub repository identifier for this software
    ///
    /// The value is not checked for an `<owner>/<repo>` shape, only that it
    /// is present and a string.
    pub fn github_repository(&self) -> Result<&str, SourceError> {
        match self.extra_information.get(GITHUB_REPOSITORY_KEY) {
            Some(Value::String(repo)) => Ok(repo.as_str()),
            _ => Err(SourceError::InvalidRepository(self.name.clone())),
        }
    }
}
