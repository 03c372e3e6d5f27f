// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field weights, method specs and the version boost, end to end.

use super::common::{group_labels, make_method, sample_context, search_path};
use rurema_search::types::EntryType;
use rurema_search::{MemoryStore, SearchConfig, SearchContext};

#[test]
fn test_name_match_outranks_description_match() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/query:lstat/");
    // File.ftype only mentions lstat in its description
    assert_eq!(group_labels(&outcome), ["File.lstat", "File.ftype"]);
    let scores: Vec<f64> = outcome
        .groups
        .iter()
        .map(|g| g.representative.hit.score)
        .collect();
    assert!(scores[0] > scores[1]);
}

#[test]
fn test_method_spec_query_matches_split_parts() {
    let context = sample_context();
    // no field contains the literal "File#lstat"
    let outcome = search_path(&context, "/query:File%23lstat/");
    assert!(group_labels(&outcome).contains(&"File.lstat"));
}

#[test]
fn test_method_spec_query_prefers_exact_name() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:3.0.0/query:String%23upcase/");
    assert_eq!(group_labels(&outcome)[0], "String#upcase");
}

#[test]
fn test_query_is_case_insensitive() {
    let context = sample_context();
    let lower = search_path(&context, "/query:kernel/");
    let upper = search_path(&context, "/query:KERNEL/");
    assert_eq!(lower.total, upper.total);
    assert!(lower.total > 0);
}

#[test]
fn test_version_boost_keeps_relative_order() {
    let context = sample_context();
    let unscoped = search_path(&context, "/query:File/");
    let scoped = search_path(&context, "/version:2.7.0/query:File/");

    let unscoped_labels: Vec<&str> = group_labels(&unscoped);
    let mut expected: Vec<&str> = Vec::new();
    for label in unscoped_labels {
        if scoped.groups.iter().any(|g| g.label() == label) && !expected.contains(&label) {
            expected.push(label);
        }
    }
    assert_eq!(group_labels(&scoped), expected);
}

#[test]
fn test_same_label_versions_collapse_into_one_group() {
    let entries = ["1.9.3", "2.7.0", "3.0.0"]
        .into_iter()
        .map(|version| make_method(version, EntryType::InstanceMethod, "Array", "each"))
        .collect();
    let context = SearchContext::new(MemoryStore::new(entries).unwrap(), SearchConfig::default());
    let outcome = search_path(&context, "/query:each/");
    assert_eq!(outcome.groups.len(), 1);
    let versions: Vec<&str> = outcome.groups[0]
        .members
        .iter()
        .map(|m| m.entry.version.as_str())
        .collect();
    assert_eq!(versions, ["1.9.3", "2.7.0", "3.0.0"]);
}
