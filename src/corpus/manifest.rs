// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the corpus root.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CorpusManifest {
    pub version: u32,
    /// Record files relative to the corpus root, each a JSON array.
    pub files: Vec<String>,
}
