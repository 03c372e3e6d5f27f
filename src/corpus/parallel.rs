// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel record loading.
//!
//! Each manifest file is read and parsed on its own rayon task. Results are
//! concatenated in manifest order, so entry ids do not depend on which file
//! finished first.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::{CorpusManifest, EntryRecord};
use crate::error::CorpusError;
use crate::types::Entry;

fn load_file(root: &Path, filename: &str) -> Result<Vec<Entry>, CorpusError> {
    let path = root.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| CorpusError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let records: Vec<EntryRecord> = serde_json::from_str(&content).map_err(|source| {
        warn!(path = %path.display(), error = %source, "unparsable record file");
        CorpusError::Parse {
            path: path.display().to_string(),
            source,
        }
    })?;
    debug!(path = %path.display(), records = records.len(), "loaded record file");
    records.into_iter().map(EntryRecord::into_entry).collect()
}

/// Load every file listed in `manifest`. The first failing file aborts.
pub fn load_entries(root: &Path, manifest: &CorpusManifest) -> Result<Vec<Entry>, CorpusError> {
    #[cfg(feature = "parallel")]
    let files = manifest.files.par_iter();
    #[cfg(not(feature = "parallel"))]
    let files = manifest.files.iter();

    let per_file = files
        .map(|filename| load_file(root, filename))
        .collect::<Result<Vec<Vec<Entry>>, CorpusError>>()?;
    Ok(per_file.into_iter().flatten().collect())
}
