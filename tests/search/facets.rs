// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet summaries, related keywords and related entries.

use super::common::{sample_context, search_path};
use rurema_search::drilldown::DRILLDOWN_LIMIT;
use rurema_search::related::collect_related_entries;
use rurema_search::FacetKey;

#[test]
fn test_type_summary_is_offered_without_type() {
    let context = sample_context();
    let outcome = search_path(&context, "/query:File/");
    let types = outcome
        .drilldowns
        .iter()
        .find(|d| d.key == FacetKey::Type)
        .expect("type drilldown");
    assert!(types.items.len() > 1);
    assert!(types.items.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_pinned_owner_facet_is_not_offered_again() {
    let context = sample_context();
    let outcome = search_path(&context, "/type:singleton-method/class:File/");
    let keys: Vec<FacetKey> = outcome.drilldowns.iter().map(|d| d.key).collect();
    assert!(!keys.contains(&FacetKey::Class));
    assert!(!keys.contains(&FacetKey::Type));
}

#[test]
fn test_related_keywords_are_local_names() {
    let context = sample_context();
    let outcome = search_path(&context, "/class:String/");
    let values: Vec<&str> = outcome
        .related_keywords
        .iter()
        .map(|item| item.value.as_str())
        .collect();
    assert_eq!(values, ["downcase", "upcase"]);
    assert!(outcome.related_keywords.len() <= DRILLDOWN_LIMIT);
    assert!(outcome.related_keywords.iter().all(|item| item.count == 2));
}

#[test]
fn test_related_entries_link_owner_and_related_names() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/query:ftype/");
    let entries = outcome.groups.iter().map(|g| g.representative.entry);
    let related = collect_related_entries(entries, &outcome.parsed);
    let links: Vec<(&str, String)> = related
        .iter()
        .map(|r| (r.label.as_str(), r.href(&outcome.parsed)))
        .collect();
    assert_eq!(
        links,
        [
            ("File", "./class:File/".to_string()),
            ("File.lstat", "./singleton-method:File.lstat/".to_string()),
        ]
    );
}

#[test]
fn test_related_entry_replaces_pinned_facet() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/singleton-method:File.ftype/");
    let entries = outcome.groups.iter().map(|g| g.representative.entry);
    let related = collect_related_entries(entries, &outcome.parsed);
    let lstat = related.iter().find(|r| r.key == "File.lstat").unwrap();
    assert_eq!(
        lstat.href(&outcome.parsed),
        "/version:2.7.0/singleton-method:File.lstat/"
    );
}
