// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The rendered response: links, snippets and version selectors.

use super::common::{sample_context, search_path};
use rurema_search::{build_response, DocumentConfig, SearchConfig, SearchContext};

#[test]
fn test_version_selector_hrefs() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/query:lstat/");
    let response = build_response(&outcome, context.config());
    let versions: Vec<(&str, &str, usize, bool)> = response
        .versions
        .iter()
        .map(|v| (v.label.as_str(), v.href.as_str(), v.count, v.selected))
        .collect();
    assert_eq!(
        versions,
        [
            ("すべて", "/query:lstat/", 4, false),
            ("2.7.0", "/query:lstat/version:2.7.0/", 2, true),
            ("3.0.0", "/query:lstat/version:3.0.0/", 2, false),
        ]
    );
}

#[test]
fn test_snippets_mark_keywords() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/query:lstat/");
    let response = build_response(&outcome, context.config());
    let ftype = response
        .groups
        .iter()
        .find(|g| g.label == "File.ftype")
        .unwrap();
    assert!(!ftype.snippets.is_empty());
    assert!(ftype.snippets[0].contains("<span class=\"keyword\">lstat</span>"));
}

#[test]
fn test_drilldown_links_narrow_the_search() {
    let context = sample_context();
    let outcome = search_path(&context, "/query:File/");
    let response = build_response(&outcome, context.config());
    let types = &response.drilldowns[0];
    assert_eq!(types.key_label, "種類");
    assert!(types.items.iter().any(|item| item.href == "./type:class/"));
    assert!(types.items.iter().all(|item| item.count.is_some()));
}

#[test]
fn test_document_base_url_applies_to_hrefs() {
    let config = SearchConfig {
        document: DocumentConfig {
            base_url: "https://docs.ruby-lang.org/ja/".to_string(),
            remove_dot_from_version: false,
        },
        ..SearchConfig::default()
    };
    let context = SearchContext::new(super::common::sample_store(), config);
    let outcome = search_path(&context, "/version:2.7.0/class:File/");
    let response = build_response(&outcome, context.config());
    assert!(response
        .groups
        .iter()
        .all(|g| g.href.starts_with("https://docs.ruby-lang.org/ja/2.7.0/")));
}

#[test]
fn test_response_json_shape() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/class:File/");
    let json = serde_json::to_value(build_response(&outcome, context.config())).unwrap();
    assert_eq!(json["topic_path"][0]["key"], "version");
    assert_eq!(json["topic_path"][1]["remove_href"], "../");
    assert!(json["groups"][0].get("related_entries").is_some());
    assert!(json["related_keywords"][0].get("count").is_some());
}
