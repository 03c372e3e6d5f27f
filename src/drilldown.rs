// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet summaries: the "narrow it down" links beside the results.
//!
//! Which summaries appear depends on what is already pinned:
//!
//! - no `type` yet: offer types, but only if the results span more than one
//! - `type` pinned: offer class, module, object and library, skipping any the
//!   reader has already pinned
//!
//! Related keywords and version counts are computed alongside.

use crate::facet::{value_label, FacetKey};
use crate::params::Parameters;
use crate::search::utils::compare_versions;
use crate::store::ResultTable;
use crate::types::EntryField;
use serde::Serialize;
use std::cmp::Ordering;

pub const DRILLDOWN_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrilldownSort {
    /// Most frequent first, ties by value ascending.
    CountDesc,
    ValueAsc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrilldownItem {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drilldown {
    pub key: FacetKey,
    pub items: Vec<DrilldownItem>,
}

impl Drilldown {
    /// Display labels for the items, in order.
    pub fn labels(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| value_label(self.key, &item.value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCount {
    pub version: String,
    pub count: usize,
    pub selected: bool,
}

/// Top `limit` values of `field` in `set`.
pub fn summarize<'s>(
    set: &impl ResultTable<'s>,
    field: EntryField,
    sort: DrilldownSort,
    limit: usize,
) -> Vec<DrilldownItem> {
    let mut items: Vec<DrilldownItem> = set
        .group_by(field)
        .into_iter()
        .map(|group| DrilldownItem {
            value: group.value,
            count: group.count,
        })
        .collect();
    items.sort_by(|a, b| compare_items(a, b, sort));
    items.truncate(limit);
    items
}

fn compare_items(a: &DrilldownItem, b: &DrilldownItem, sort: DrilldownSort) -> Ordering {
    match sort {
        DrilldownSort::CountDesc => b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)),
        DrilldownSort::ValueAsc => a.value.cmp(&b.value),
    }
}

/// The facet summaries to show for `set`, given what is already pinned.
pub fn drilldowns<'s>(parameters: &Parameters, set: &impl ResultTable<'s>) -> Vec<Drilldown> {
    if parameters.contains(FacetKey::Type) {
        [FacetKey::Class, FacetKey::Module, FacetKey::Object, FacetKey::Library]
            .into_iter()
            .filter(|key| !parameters.contains(*key))
            .filter_map(|key| {
                let field = key.field()?;
                let items = summarize(set, field, DrilldownSort::ValueAsc, DRILLDOWN_LIMIT);
                (!items.is_empty()).then_some(Drilldown { key, items })
            })
            .collect()
    } else {
        let items = summarize(set, EntryField::Type, DrilldownSort::CountDesc, DRILLDOWN_LIMIT);
        if items.len() > 1 {
            vec![Drilldown {
                key: FacetKey::Type,
                items,
            }]
        } else {
            Vec::new()
        }
    }
}

/// Local names in the results that are not already query words.
pub fn related_keywords<'s>(
    parameters: &Parameters,
    set: &impl ResultTable<'s>,
) -> Vec<DrilldownItem> {
    let words = parameters.query_words();
    let mut items = summarize(set, EntryField::LocalName, DrilldownSort::ValueAsc, usize::MAX);
    items.retain(|item| !words.iter().any(|word| *word == item.value));
    items.truncate(DRILLDOWN_LIMIT);
    items
}

/// Hits per version in the unscoped results, oldest version first.
pub fn version_counts<'s>(
    unscoped: &impl ResultTable<'s>,
    pinned: Option<&str>,
) -> Vec<VersionCount> {
    let mut counts: Vec<VersionCount> = unscoped
        .group_by(EntryField::Version)
        .into_iter()
        .map(|group| VersionCount {
            selected: pinned == Some(group.value.as_str()),
            version: group.value,
            count: group.count,
        })
        .collect();
    counts.sort_by(|a, b| compare_versions(&a.version, &b.version));
    counts
}
