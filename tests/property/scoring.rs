// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Version boost and method-spec expansion.

use super::common::{make_entry, make_method};
use proptest::prelude::*;
use rurema_search::query::compile_query;
use rurema_search::store::{Boost, ResultTable};
use rurema_search::{EntryField, EntryStore, EntryType, MemoryStore, Predicate};

proptest! {
    #[test]
    fn prop_version_boost_is_monotonic(prior in 0.0f64..10.0, with_description in any::<bool>()) {
        let entries: Vec<_> = ["2.7.0", "3.0.0"]
            .into_iter()
            .map(|version| {
                let mut entry = make_method(version, EntryType::InstanceMethod, "String", "upcase");
                entry.score = prior;
                if with_description {
                    entry.description = Some("upcase returns a copy".to_string());
                }
                entry
            })
            .collect();
        let store = MemoryStore::new(entries).unwrap();
        let query = compile_query(&["upcase".to_string()]);

        let unscoped = store.select(std::slice::from_ref(&query)).unwrap();
        prop_assert_eq!(unscoped.len(), 2);
        let before: Vec<f64> = unscoped.hits().iter().map(|hit| hit.score).collect();
        prop_assert_eq!(before[0], before[1]);

        let version = Predicate::equals(EntryField::Version, "3.0.0");
        let scoped = unscoped.refine(&version, Boost::SelfScore).unwrap();
        prop_assert_eq!(scoped.len(), 1);
        let boosted = scoped.hits()[0];
        let own_before = unscoped
            .hits()
            .iter()
            .find(|hit| hit.id == boosted.id)
            .unwrap()
            .score;
        prop_assert!(boosted.score > own_before);
        prop_assert!(unscoped.hits().iter().all(|hit| boosted.score >= hit.score));
    }
}

#[test]
fn test_method_spec_word_matches_split_parts() {
    let mut stat = make_method("2.7.0", EntryType::SingletonMethod, "File", "stat");
    stat.description = Some("シンボリックリンクを辿ります。lstat も参照。".to_string());
    assert!(!stat.name.contains("File#lstat"));

    let query = compile_query(&["File#lstat".to_string()]);
    assert!(query.evaluate(&stat).is_some());

    let mut other = make_method("2.7.0", EntryType::SingletonMethod, "Dir", "stat");
    other.description = Some("lstat も参照。".to_string());
    assert!(query.evaluate(&other).is_none());
}

#[test]
fn test_plain_word_needs_a_field_match() {
    let entry = make_entry("2.7.0", EntryType::Class, "File");
    assert!(compile_query(&["file".to_string()]).evaluate(&entry).is_some());
    assert!(compile_query(&["array".to_string()]).evaluate(&entry).is_none());
}
