// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory entry store.
//!
//! A linear scan over a `Vec<Entry>`. With the `parallel` feature the scan is
//! split across rayon's pool; results come back in id order either way.

use super::{EntryStore, OpenTables, ResultSet};
use crate::error::{CorpusError, Result, StoreError};
use crate::query::Predicate;
use crate::scoring::BASE_INCLUSION_SCORE;
use crate::types::{Entry, EntryId, Hit};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    tables: OpenTables,
    closed: AtomicBool,
}

impl MemoryStore {
    /// Build a store, checking the entry invariants: at most one owner, a
    /// non-negative score and a unique key.
    pub fn new(entries: Vec<Entry>) -> std::result::Result<Self, CorpusError> {
        let mut keys = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.owner_count() > 1 {
                return Err(CorpusError::ConflictingOwner {
                    key: entry.key.clone(),
                });
            }
            if entry.score < 0.0 || entry.score.is_nan() {
                return Err(CorpusError::NegativeScore {
                    key: entry.key.clone(),
                });
            }
            if !keys.insert(entry.key.as_str()) {
                return Err(CorpusError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }
        Ok(Self {
            entries,
            tables: OpenTables::new(),
            closed: AtomicBool::new(false),
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Stop answering queries. Later calls fail with `StoreUnavailable`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn score(entry: &Entry, predicates: &[Predicate]) -> Option<f64> {
        let mut score = BASE_INCLUSION_SCORE + entry.score;
        for predicate in predicates {
            score += predicate.evaluate(entry)?;
        }
        Some(score)
    }
}

impl EntryStore for MemoryStore {
    type Results<'s> = ResultSet<'s>;

    fn select(&self, predicates: &[Predicate]) -> Result<ResultSet<'_>> {
        if self.is_closed() {
            return Err(StoreError::Closed.into());
        }
        let lease = self.tables.lease();

        #[cfg(feature = "parallel")]
        let hits: Vec<Hit> = self
            .entries
            .par_iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                Self::score(entry, predicates).map(|score| Hit {
                    id: EntryId(i as u32),
                    score,
                })
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let hits: Vec<Hit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                Self::score(entry, predicates).map(|score| Hit {
                    id: EntryId(i as u32),
                    score,
                })
            })
            .collect();

        Ok(ResultSet::new(&self.entries, hits, lease))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn open_tables(&self) -> &OpenTables {
        &self.tables
    }
}
