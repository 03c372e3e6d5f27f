// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deployment settings, read from TOML.
//!
//! ```toml
//! double_decode = false
//! normalize_path = true
//!
//! [document]
//! base_url = "https://docs.ruby-lang.org/ja/"
//! remove_dot_from_version = false
//! ```
//!
//! Every field has a default, so an empty file is a valid config.

use crate::error::{Result, SearchError};
use crate::params::Decoding;
use crate::url::UrlMapper;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The front end percent-encodes request paths twice.
    pub double_decode: bool,
    /// The front end unescapes paths before they reach us.
    pub normalize_path: bool,
    pub document: DocumentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Where the rendered manual lives; entry hrefs are built under it.
    pub base_url: String,
    /// Publish `2.7.0` as `270` in manual URLs.
    pub remove_dot_from_version: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            base_url: "/".to_string(),
            remove_dot_from_version: false,
        }
    }
}

impl SearchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            SearchError::Config(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn decoding(&self) -> Decoding {
        Decoding::from_flag(self.double_decode)
    }

    pub fn url_mapper(&self, version: &str) -> UrlMapper {
        UrlMapper::new(
            &self.document.base_url,
            version,
            self.document.remove_dot_from_version,
        )
    }
}
