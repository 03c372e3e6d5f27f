// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rurema_search::{EntryStore, SearchConfig, SearchContext, SearchOutcome, SearchRequest};
use serde_json::Value;
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from rurema_search::testing.
// Each test binary uses a different subset.
#[allow(unused_imports)]
pub use rurema_search::testing::{
    make_entry, make_labelled, make_method, sample_context, sample_entries, sample_store,
};

/// Run `path` through `context`, panicking on error.
pub fn search_path<'c, S: EntryStore>(
    context: &'c SearchContext<S>,
    path: &str,
) -> SearchOutcome<'c> {
    match context.search(&SearchRequest::new(path)) {
        Ok(outcome) => outcome,
        Err(err) => panic!("search {} failed: {}", path, err),
    }
}

/// Group labels of an outcome, in display order.
pub fn group_labels<'a>(outcome: &'a SearchOutcome<'_>) -> Vec<&'a str> {
    outcome.groups.iter().map(|group| group.label()).collect()
}

/// Every entry on the current page, in rank order.
pub fn page_names<'a>(outcome: &'a SearchOutcome<'_>) -> Vec<&'a str> {
    outcome
        .groups
        .iter()
        .flat_map(|group| group.members.iter())
        .map(|member| member.entry.name.as_str())
        .collect()
}

pub fn context_with(config: SearchConfig) -> SearchContext<rurema_search::MemoryStore> {
    SearchContext::new(sample_store(), config)
}

// ============================================================================
// CORPUS FIXTURES
// ============================================================================

/// Write `manifest.json` plus one JSON array file per `(name, records)`.
pub fn write_corpus(dir: &Path, files: &[(&str, Value)]) {
    let names: Vec<&str> = files.iter().map(|(name, _)| *name).collect();
    let manifest = serde_json::json!({ "version": 1, "files": names });
    fs::write(dir.join("manifest.json"), manifest.to_string()).unwrap();
    for (name, records) in files {
        fs::write(dir.join(name), records.to_string()).unwrap();
    }
}

/// Two small version files shaped like the exporter's output.
pub fn fixture_files() -> Vec<(&'static str, Value)> {
    vec![
        (
            "2.7.0.json",
            serde_json::json!([
                {"name": "File", "type": "class", "version": "2.7.0", "library": "_builtin",
                 "description": "ファイルアクセスのためのクラスです。\n\n詳しくは [[c:IO]] を参照。"},
                {"name": "File.lstat", "type": "singleton method", "version": "2.7.0",
                 "class": "File", "library": "_builtin",
                 "description": "[[m:File.stat]] と同様ですが、リンクを辿りません。"},
                {"name": "Net::HTTP", "type": "class", "version": "2.7.0", "library": "net/http"}
            ]),
        ),
        (
            "3.0.0.json",
            serde_json::json!([
                {"name": "File", "type": "class", "version": "3.0.0", "library": "_builtin"},
                {"name": "File.lstat", "type": "singleton-method", "version": "3.0.0",
                 "class": "File", "library": "_builtin"}
            ]),
        ),
    ]
}
