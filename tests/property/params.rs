// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Path parsing invariants.

use proptest::prelude::*;
use rurema_search::params::parse;
use rurema_search::{parse_path, Decoding, FacetKey};

// ============================================================================
// STRATEGIES
// ============================================================================

fn single_key_strategy() -> impl Strategy<Value = FacetKey> {
    prop::sample::select(
        FacetKey::ALL
            .into_iter()
            .filter(|key| *key != FacetKey::Query)
            .collect::<Vec<_>>(),
    )
}

/// Values that survive decoding untouched: no `+`, no edge whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9:#./_~-]([A-Za-z0-9:#./_~ -]{0,10}[A-Za-z0-9:#./_~-])?")
        .unwrap()
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9#.]{1,8}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_rendered_path_parses_to_same_parameters(
        pairs in prop::collection::vec((single_key_strategy(), value_strategy()), 0..6)
    ) {
        let segments: Vec<String> = pairs
            .iter()
            .map(|(key, value)| format!("{}:{}", key.as_str(), value))
            .collect();
        let parsed = parse(&segments, Decoding::Single).unwrap();
        let reparsed = parse_path(&parsed.to_path(), Decoding::Single).unwrap();
        prop_assert_eq!(&reparsed.parameters, &parsed.parameters);
        prop_assert_eq!(&reparsed.ordered, &parsed.ordered);
    }

    #[test]
    fn prop_query_words_accumulate_in_order(
        words in prop::collection::vec(word_strategy(), 1..6)
    ) {
        let segments: Vec<String> = words.iter().map(|word| format!("query:{}", word)).collect();
        let parsed = parse(&segments, Decoding::Single).unwrap();
        prop_assert_eq!(parsed.parameters.query_words(), words.as_slice());
        prop_assert_eq!(parsed.ordered.len(), words.len());
    }

    #[test]
    fn prop_first_single_value_wins(
        key in single_key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let segments = [
            format!("{}:{}", key.as_str(), first),
            format!("{}:{}", key.as_str(), second),
        ];
        let parsed = parse(&segments, Decoding::Single).unwrap();
        prop_assert_eq!(parsed.parameters.single(key), Some(first.as_str()));
        prop_assert_eq!(parsed.ordered.len(), 1);
    }
}

#[test]
fn test_query_accumulates_and_class_keeps_first() {
    let parsed = parse(["query:foo", "query:bar"], Decoding::Single).unwrap();
    assert_eq!(parsed.parameters.query_words(), ["foo", "bar"]);

    let parsed = parse(["class:A", "class:B"], Decoding::Single).unwrap();
    assert_eq!(parsed.parameters.single(FacetKey::Class), Some("A"));
}
