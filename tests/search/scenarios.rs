// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end searches against known corpora.

use super::common::{group_labels, make_entry, page_names, sample_context, search_path};
use rurema_search::query::MatchTerm;
use rurema_search::types::EntryType;
use rurema_search::{
    EntryField, FacetKey, MemoryStore, Predicate, SearchConfig, SearchContext, SearchRequest,
};

#[test]
fn test_type_class_without_query() {
    let context = sample_context();
    let outcome = search_path(&context, "/type:class/");

    assert_eq!(
        outcome.conditions.predicates,
        vec![Predicate::equals(EntryField::Type, "class")]
    );
    assert_eq!(outcome.conditions.version, None);

    // one group per class; Ractor carries a score prior
    assert_eq!(
        group_labels(&outcome),
        ["Ractor", "Array", "File", "Net::HTTP", "String"]
    );
    assert!(outcome.drilldowns.iter().all(|d| d.key != FacetKey::Type));
    let keys: Vec<FacetKey> = outcome.drilldowns.iter().map(|d| d.key).collect();
    assert_eq!(keys, [FacetKey::Library]);

    assert!(!outcome.pagination.have_pages());
    assert!(outcome.pagination.links().is_empty());
}

#[test]
fn test_versioned_string_instance_methods() {
    let context = sample_context();
    let outcome = search_path(&context, "/version:3.0.0/type:instance-method/class:String/");

    assert_eq!(
        outcome.conditions.predicates,
        vec![
            Predicate::equals(EntryField::Type, "instance-method"),
            Predicate::equals(EntryField::Class, "String"),
        ]
    );
    assert_eq!(
        outcome.conditions.version,
        Some(Predicate::equals(EntryField::Version, "3.0.0"))
    );

    assert_eq!(outcome.total, 2);
    for group in &outcome.groups {
        for member in &group.members {
            assert_eq!(member.entry.version, "3.0.0");
            assert_eq!(member.entry.class.as_deref(), Some("String"));
            // the boost doubles the unscoped 1.0 evenly
            assert_eq!(member.hit.score, 2.0);
        }
    }
    assert_eq!(group_labels(&outcome), ["String#downcase", "String#upcase"]);

    let versions: Vec<(&str, usize, bool)> = outcome
        .versions
        .iter()
        .map(|v| (v.version.as_str(), v.count, v.selected))
        .collect();
    assert_eq!(versions, [("2.7.0", 2, false), ("3.0.0", 2, true)]);
}

fn foo_bar_context() -> SearchContext<MemoryStore> {
    let entries = (0..25)
        .map(|i| {
            let mut entry = make_entry("2.7.0", EntryType::Document, &format!("doc{:02}", i));
            entry.description = Some(format!("foo and bar number {}", i));
            entry
        })
        .chain(std::iter::once({
            let mut only_foo = make_entry("2.7.0", EntryType::Document, "only-foo");
            only_foo.description = Some("foo alone".to_string());
            only_foo
        }))
        .collect();
    SearchContext::new(MemoryStore::new(entries).unwrap(), SearchConfig::default())
}

#[test]
fn test_two_words_second_page() {
    let context = foo_bar_context();
    let request = SearchRequest::new("/query:foo%20bar/")
        .with_n_entries("10")
        .with_page("2");
    let outcome = context.search(&request).unwrap();

    assert_eq!(outcome.parsed.parameters.query_words(), ["foo", "bar"]);
    let [Predicate::WeightedMatch { terms }] = outcome.conditions.predicates.as_slice() else {
        panic!("expected one weighted match");
    };
    let words: Vec<&str> = terms.iter().map(MatchTerm::text).collect();
    assert_eq!(words, ["foo", "bar"]);

    // conjunctive: the entry with only one of the words is out
    assert_eq!(outcome.total, 25);
    assert_eq!(outcome.pagination.page_size, 10);
    assert_eq!(outcome.pagination.current_page, 2);
    let window = outcome.pagination.window();
    assert_eq!((window.offset, window.limit), (10, 10));

    let expected: Vec<String> = (10..20).map(|i| format!("doc{:02}", i)).collect();
    assert_eq!(page_names(&outcome), expected);
}

#[test]
fn test_page_past_the_end_falls_back_to_first() {
    let context = foo_bar_context();
    let request = SearchRequest::new("/query:foo%20bar/")
        .with_n_entries("10")
        .with_page("4");
    let outcome = context.search(&request).unwrap();
    assert_eq!(outcome.pagination.current_page, 1);
    assert_eq!(page_names(&outcome)[0], "doc00");
}

#[test]
fn test_no_matches_is_a_normal_outcome() {
    let context = sample_context();
    let outcome = search_path(&context, "/query:zzzzzz/");
    assert_eq!(outcome.total, 0);
    assert!(outcome.groups.is_empty());
    assert!(outcome.drilldowns.is_empty());
    assert!(outcome.related_keywords.is_empty());
    assert!(outcome.versions.is_empty());
    assert_eq!(outcome.pagination.n_pages, 1);
}

#[test]
fn test_page_after_exact_multiple_falls_back_to_first() {
    let entries = (0..20)
        .map(|i| {
            let mut entry = make_entry("2.7.0", EntryType::Document, &format!("doc{:02}", i));
            entry.description = Some("foo".to_string());
            entry
        })
        .collect();
    let context = SearchContext::new(MemoryStore::new(entries).unwrap(), SearchConfig::default());
    let request = SearchRequest::new("/query:foo/")
        .with_n_entries("10")
        .with_page("3");
    let outcome = context.search(&request).unwrap();

    assert_eq!(outcome.total, 20);
    assert_eq!(outcome.pagination.n_pages, 2);
    assert_eq!(outcome.pagination.current_page, 1);
    assert_eq!(outcome.groups.len(), 10);
    assert_eq!(page_names(&outcome)[0], "doc00");
}
