// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Store failures and result set lifetimes.

use super::common::{group_labels, sample_context, sample_entries, sample_store, search_path};
use rurema_search::scoring::BASE_INCLUSION_SCORE;
use rurema_search::store::{Boost, OpenTables, TableLease};
use rurema_search::{
    Entry, EntryId, EntryStore, Hit, MemoryStore, Predicate, ResultSet, ResultTable, SearchConfig,
    SearchContext, SearchError, SearchRequest,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_closed_store_answers_unavailable() {
    let context = sample_context();
    context.store().close();
    let err = context.search(&SearchRequest::new("/query:File/")).unwrap_err();
    assert!(matches!(err, SearchError::StoreUnavailable(_)));
    assert_eq!(err.http_status(), 503);
    assert_eq!(context.store().open_tables().count(), 0);
}

#[test]
fn test_tables_released_after_every_outcome() {
    let context = sample_context();
    {
        let outcome = search_path(&context, "/version:2.7.0/query:File/");
        assert!(outcome.total > 0);
    }
    assert_eq!(context.store().open_tables().count(), 0);

    assert!(context.search(&SearchRequest::new("/nocolon/")).is_err());
    assert_eq!(context.store().open_tables().count(), 0);

    let _ = search_path(&context, "/query:zzzzzz/");
    assert_eq!(context.store().open_tables().count(), 0);
}

/// Counts how often the pipeline reaches the store.
struct CountingStore {
    inner: MemoryStore,
    selects: AtomicUsize,
}

impl EntryStore for CountingStore {
    type Results<'s> = ResultSet<'s>;

    fn select(&self, predicates: &[Predicate]) -> rurema_search::Result<ResultSet<'_>> {
        self.selects.fetch_add(1, Ordering::SeqCst);
        self.inner.select(predicates)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn open_tables(&self) -> &OpenTables {
        self.inner.open_tables()
    }
}

#[test]
fn test_search_runs_over_any_store() {
    let store = CountingStore {
        inner: sample_store(),
        selects: AtomicUsize::new(0),
    };
    let context = SearchContext::new(store, SearchConfig::default());
    let outcome = search_path(&context, "/version:3.0.0/class:String/");
    assert_eq!(outcome.total, 2);
    // one unscoped select; the version pass refines in place
    assert_eq!(context.store().selects.load(Ordering::SeqCst), 1);
    drop(outcome);
    assert_eq!(context.store().open_tables().count(), 0);
}

/// Keeps entries in a map keyed by id, the way an engine binding would cache
/// fetched records, and hands out its own table type.
struct KeyedStore {
    records: BTreeMap<EntryId, Entry>,
    tables: OpenTables,
}

struct KeyedTable<'s> {
    store: &'s KeyedStore,
    hits: Vec<Hit>,
    _lease: TableLease,
}

impl KeyedStore {
    fn new(entries: Vec<Entry>) -> Self {
        let records = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| (EntryId(i as u32), entry))
            .collect();
        Self {
            records,
            tables: OpenTables::new(),
        }
    }

    fn table(&self, hits: Vec<Hit>) -> KeyedTable<'_> {
        KeyedTable {
            store: self,
            hits,
            _lease: self.tables.lease(),
        }
    }
}

impl EntryStore for KeyedStore {
    type Results<'s> = KeyedTable<'s>;

    fn select(&self, predicates: &[Predicate]) -> rurema_search::Result<KeyedTable<'_>> {
        let hits = self
            .records
            .iter()
            .filter_map(|(id, entry)| {
                let mut score = BASE_INCLUSION_SCORE + entry.score;
                for predicate in predicates {
                    score += predicate.evaluate(entry)?;
                }
                Some(Hit { id: *id, score })
            })
            .collect();
        Ok(self.table(hits))
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn open_tables(&self) -> &OpenTables {
        &self.tables
    }
}

impl<'s> ResultTable<'s> for KeyedTable<'s> {
    fn hits(&self) -> &[Hit] {
        &self.hits
    }

    fn entry(&self, hit: &Hit) -> Option<&'s Entry> {
        self.store.records.get(&hit.id)
    }

    fn refine(&self, predicate: &Predicate, boost: Boost) -> rurema_search::Result<Self> {
        let hits = self
            .iter()
            .filter_map(|(entry, hit)| {
                let score = hit.score + predicate.evaluate(entry)?;
                let score = match boost {
                    Boost::Keep => score,
                    Boost::SelfScore => score * 2.0,
                };
                Some(Hit { id: hit.id, score })
            })
            .collect();
        Ok(self.store.table(hits))
    }

    fn ranked(&self) -> Vec<Hit> {
        let mut hits = self.hits.clone();
        hits.sort_by(|a, b| {
            let label = |hit: &Hit| self.entry(hit).map_or("", |e| e.label.as_str());
            b.score
                .total_cmp(&a.score)
                .then_with(|| label(a).cmp(label(b)))
                .then_with(|| a.id.cmp(&b.id))
        });
        hits
    }
}

#[test]
fn test_search_over_a_store_with_its_own_tables() {
    let keyed = SearchContext::new(KeyedStore::new(sample_entries()), SearchConfig::default());
    let memory = sample_context();
    for path in [
        "/type:class/",
        "/version:2.7.0/query:lstat/",
        "/version:3.0.0/type:instance-method/class:String/",
        "/library:net/",
    ] {
        let expected = search_path(&memory, path);
        let outcome = search_path(&keyed, path);
        assert_eq!(outcome.total, expected.total, "{}", path);
        assert_eq!(group_labels(&outcome), group_labels(&expected), "{}", path);
        assert_eq!(outcome.drilldowns, expected.drilldowns, "{}", path);
        assert_eq!(outcome.versions, expected.versions, "{}", path);
    }
    assert_eq!(keyed.store().open_tables().count(), 0);
}
