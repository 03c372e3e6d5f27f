// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The entry store seam.
//!
//! Everything above this module talks to an [`EntryStore`] and the
//! [`ResultTable`] it hands back: select by predicates, refine a result set,
//! group it by a field. The crate ships [`MemoryStore`] with its slice-backed
//! [`ResultSet`]; a binding to a real search engine brings its own table type
//! through [`EntryStore::Results`].
//!
//! # Result set leases
//!
//! Search engines hand out temporary result tables that must be closed, and a
//! forgotten one leaks until the process dies. A [`ResultSet`] owns a
//! [`TableLease`] that is released when the set is dropped, so early returns
//! and `?` clean up the same way success does. [`OpenTables`] counts live
//! leases; tests assert it drops back to zero after every search.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::query::Predicate;
use crate::scoring::ranking::rank_hits;
use crate::types::{Entry, EntryField, Hit};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub trait EntryStore: Send + Sync {
    type Results<'s>: ResultTable<'s>
    where
        Self: 's;

    /// Every entry matching all `predicates`. An empty slice selects all.
    fn select(&self, predicates: &[Predicate]) -> Result<Self::Results<'_>>;

    fn all(&self) -> Result<Self::Results<'_>> {
        self.select(&[])
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live result set counter for this store.
    fn open_tables(&self) -> &OpenTables;
}

/// A selected set of hits whose entries live as long as the store borrow.
///
/// Dropping a table releases whatever the store holds for it.
pub trait ResultTable<'s>: Sized {
    /// Hits in selection order.
    fn hits(&self) -> &[Hit];

    fn entry(&self, hit: &Hit) -> Option<&'s Entry>;

    /// A new table holding the hits that also satisfy `predicate`.
    ///
    /// The parent is left untouched; the child holds its own lease.
    fn refine(&self, predicate: &Predicate, boost: Boost) -> Result<Self>;

    /// Hits sorted into ranking order.
    fn ranked(&self) -> Vec<Hit>;

    fn len(&self) -> usize {
        self.hits().len()
    }

    fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&'s Entry, Hit)> {
        self.hits()
            .iter()
            .filter_map(move |hit| self.entry(hit).map(|entry| (entry, *hit)))
    }

    /// Count members per distinct value of `field`, in first-seen order.
    /// Entries without the field are not counted.
    fn group_by(&self, field: EntryField) -> Vec<FieldGroup> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for (entry, _) in self.iter() {
            if let Some(value) = entry.field(field) {
                *counts.entry(value).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(value, count)| FieldGroup {
                value: value.to_string(),
                count,
            })
            .collect()
    }
}

/// How a refinement pass treats the scores of surviving hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boost {
    /// Keep scores as they are.
    Keep,
    /// Add each hit's score to itself.
    SelfScore,
}

/// Counter of result sets that have not been released yet.
#[derive(Debug, Clone, Default)]
pub struct OpenTables(Arc<AtomicUsize>);

impl OpenTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lease(&self) -> TableLease {
        self.0.fetch_add(1, Ordering::SeqCst);
        TableLease {
            tables: self.clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Released on drop.
#[derive(Debug)]
pub struct TableLease {
    tables: OpenTables,
}

impl Drop for TableLease {
    fn drop(&mut self) {
        self.tables.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Value and member count of one group in a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub value: String,
    pub count: usize,
}

/// Hits selected from a [`MemoryStore`], borrowing its entries.
#[derive(Debug)]
pub struct ResultSet<'s> {
    entries: &'s [Entry],
    hits: Vec<Hit>,
    lease: TableLease,
}

impl<'s> ResultSet<'s> {
    pub fn new(entries: &'s [Entry], hits: Vec<Hit>, lease: TableLease) -> Self {
        Self {
            entries,
            hits,
            lease,
        }
    }
}

impl<'s> ResultTable<'s> for ResultSet<'s> {
    fn hits(&self) -> &[Hit] {
        &self.hits
    }

    fn entry(&self, hit: &Hit) -> Option<&'s Entry> {
        self.entries.get(hit.id.as_usize())
    }

    fn refine(&self, predicate: &Predicate, boost: Boost) -> Result<Self> {
        let hits = self
            .iter()
            .filter_map(|(entry, hit)| {
                let contribution = predicate.evaluate(entry)?;
                let score = hit.score + contribution;
                let score = match boost {
                    Boost::Keep => score,
                    Boost::SelfScore => score + score,
                };
                Some(Hit { id: hit.id, score })
            })
            .collect();
        Ok(ResultSet::new(self.entries, hits, self.lease.tables.lease()))
    }

    fn ranked(&self) -> Vec<Hit> {
        let mut hits = self.hits.clone();
        rank_hits(&mut hits, self.entries);
        hits
    }
}
