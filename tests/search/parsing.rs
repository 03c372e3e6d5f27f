// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request path handling as seen through a full search.

use super::common::{context_with, group_labels, sample_context, search_path};
use rurema_search::{FacetKey, SearchConfig, SearchError, SearchRequest};

#[test]
fn test_unknown_keys_are_ignored() {
    let context = sample_context();
    let outcome = search_path(&context, "/color:blue/class:File/");
    assert_eq!(outcome.parsed.ordered.len(), 1);
    assert!(!outcome.parsed.parameters.contains(FacetKey::Query));
    assert_eq!(outcome.total, 6);
}

#[test]
fn test_segment_without_colon_is_rejected() {
    let context = sample_context();
    let err = context.search(&SearchRequest::new("/File/")).unwrap_err();
    assert!(matches!(err, SearchError::MalformedParameter { ref key } if key == "File"));
    assert_eq!(err.http_status(), 400);
}

#[test]
fn test_known_key_without_value_is_rejected() {
    let context = sample_context();
    for path in ["/class:/", "/query:%20/", "/version:+/"] {
        let err = context.search(&SearchRequest::new(path)).unwrap_err();
        assert!(
            matches!(err, SearchError::MalformedParameter { .. }),
            "{} should be malformed",
            path
        );
    }
}

#[test]
fn test_percent_encoded_values() {
    let context = sample_context();
    let outcome = search_path(&context, "/class:Net%3A%3AHTTP/");
    assert_eq!(
        outcome.parsed.parameters.single(FacetKey::Class),
        Some("Net::HTTP")
    );
}

#[test]
fn test_double_decoding_comes_from_config() {
    let double = context_with(SearchConfig {
        double_decode: true,
        ..SearchConfig::default()
    });
    let outcome = search_path(&double, "/library:net%252Fhttp/type:library/");
    assert_eq!(
        outcome.parsed.parameters.single(FacetKey::Library),
        Some("net/http")
    );
    assert_eq!(group_labels(&outcome), ["net/http"]);

    let single = sample_context();
    let outcome = search_path(&single, "/library:net%252Fhttp/");
    assert_eq!(
        outcome.parsed.parameters.single(FacetKey::Library),
        Some("net%2Fhttp")
    );
    assert_eq!(outcome.total, 0);
}

#[test]
fn test_unescaped_paths_are_normalized_when_configured() {
    let context = context_with(SearchConfig {
        normalize_path: true,
        ..SearchConfig::default()
    });
    let outcome = search_path(&context, "/library:net/http/type:library/");
    assert_eq!(
        outcome.parsed.parameters.single(FacetKey::Library),
        Some("net/http")
    );
    assert_eq!(outcome.total, 2);
}

#[test]
fn test_link_path_round_trips() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:2.7.0/class:Net::HTTP/query:get/");
    assert_eq!(
        outcome.parsed.to_path(),
        "version:2.7.0/class:Net%3A%3AHTTP/query:get/"
    );
}

#[test]
fn test_encoded_plus_survives_decoding() {
    let context = sample_context();
    let outcome = search_path(&context, "/query:C%2B%2B/");
    assert_eq!(outcome.parsed.parameters.query_words(), ["C++"]);
    assert_eq!(outcome.total, 0);

    let spaced = search_path(&context, "/query:String+upcase/");
    assert_eq!(spaced.parsed.parameters.query_words(), ["String", "upcase"]);
}
