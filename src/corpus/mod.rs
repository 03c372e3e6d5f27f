// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the documentation corpus from disk.
//!
//! A corpus is a directory holding `manifest.json` and the record files it
//! lists:
//!
//! ```text
//! corpus/
//! ├── manifest.json   {"version": 1, "files": ["2.7.0.json", "3.0.0.json"]}
//! ├── 2.7.0.json      [{"name": "String", "type": "class", ...}, ...]
//! └── 3.0.0.json
//! ```
//!
//! Records are turned into [`Entry`](crate::types::Entry) values with the
//! exporter's defaulting rules applied, then validated by
//! [`MemoryStore::new`].

pub mod manifest;
pub mod parallel;
pub mod record;

pub use manifest::*;
pub use parallel::load_entries;
pub use record::EntryRecord;

use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::{CorpusError, Result};
use crate::store::{EntryStore, MemoryStore};

pub fn read_manifest(root: &Path) -> std::result::Result<CorpusManifest, CorpusError> {
    let path = root.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|source| CorpusError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let manifest: CorpusManifest =
        serde_json::from_str(&content).map_err(|source| CorpusError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    if manifest.version != MANIFEST_VERSION {
        return Err(CorpusError::UnsupportedManifest(manifest.version));
    }
    Ok(manifest)
}

pub fn load_corpus(root: &Path) -> Result<MemoryStore> {
    let start = Instant::now();
    let manifest = read_manifest(root)?;
    let entries = load_entries(root, &manifest)?;
    let store = MemoryStore::new(entries)?;
    info!(
        root = %root.display(),
        files = manifest.files.len(),
        entries = store.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "corpus loaded"
    );
    Ok(store)
}
