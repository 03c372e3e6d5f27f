// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index page: what is in the corpus before anyone has searched.
//!
//! Three blocks, all optionally restricted to one version:
//!
//! - entry counts per version, plus an "all versions" total
//! - the type drilldown
//! - shelves of the large built-in classes (more than
//!   [`SHELF_MIN_ENTRIES`] entries), once by initial letter and once by size
//!
//! Shelf counts are the number of entries owned by the class, so a class
//! with 150 methods lands on `〜200件`.

use crate::drilldown::{summarize, version_counts, DrilldownItem, DrilldownSort, DRILLDOWN_LIMIT};
use crate::error::Result;
use crate::links::SITE_TITLE;
use crate::query::Predicate;
use crate::store::{Boost, EntryStore, ResultTable};
use crate::types::EntryField;
use serde::Serialize;

pub const SHELF_MIN_ENTRIES: usize = 25;
/// Classes considered for the frequency shelves, largest first.
pub const FREQUENCY_LIMIT: usize = 20;

const BUILTIN_LIBRARY: &str = "_builtin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    /// `None` for the "all versions" row.
    pub version: Option<String>,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shelf {
    pub label: &'static str,
    pub classes: Vec<DrilldownItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub title: String,
    pub versions: Vec<VersionSummary>,
    pub types: Vec<DrilldownItem>,
    pub shelves_by_name: Vec<Shelf>,
    pub shelves_by_frequency: Vec<Shelf>,
}

pub fn overview<S>(store: &S, version: Option<&str>) -> Result<Overview>
where
    S: EntryStore + ?Sized,
{
    let all = store.all()?;

    let mut versions = vec![VersionSummary {
        version: None,
        label: "すべて".to_string(),
        count: all.len(),
        selected: version.is_none(),
    }];
    versions.extend(version_counts(&all, version).into_iter().map(|count| {
        VersionSummary {
            label: count.version.clone(),
            version: Some(count.version),
            count: count.count,
            selected: count.selected,
        }
    }));

    let scoped = match version {
        Some(version) => all.refine(&Predicate::equals(EntryField::Version, version), Boost::Keep)?,
        None => store.all()?,
    };
    let types = summarize(&scoped, EntryField::Type, DrilldownSort::CountDesc, DRILLDOWN_LIMIT);

    let builtin = scoped.refine(
        &Predicate::equals(EntryField::Library, BUILTIN_LIBRARY),
        Boost::Keep,
    )?;
    let classes = summarize(&builtin, EntryField::Class, DrilldownSort::ValueAsc, usize::MAX);

    let large: Vec<DrilldownItem> = classes
        .iter()
        .filter(|item| item.count > SHELF_MIN_ENTRIES)
        .cloned()
        .collect();
    let shelves_by_name = shelve(large, name_band);

    let mut by_count = classes;
    by_count.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    by_count.truncate(FREQUENCY_LIMIT);
    by_count.retain(|item| item.count > SHELF_MIN_ENTRIES);
    let shelves_by_frequency = shelve(by_count, frequency_band);

    let title = match version {
        Some(version) => format!("Ruby {} | {}", version, SITE_TITLE),
        None => format!("Rubyリファレンスマニュアル全文検索 | {}", SITE_TITLE),
    };

    Ok(Overview {
        title,
        versions,
        types,
        shelves_by_name,
        shelves_by_frequency,
    })
}

/// Bucket `items` by `band`, keeping item order within a shelf and ordering
/// shelves by the band's sort key.
fn shelve<F>(items: Vec<DrilldownItem>, band: F) -> Vec<Shelf>
where
    F: Fn(&DrilldownItem) -> (i64, &'static str),
{
    let mut shelves: Vec<(i64, Shelf)> = Vec::new();
    for item in items {
        let (order, label) = band(&item);
        match shelves.iter_mut().find(|(o, _)| *o == order) {
            Some((_, shelf)) => shelf.classes.push(item),
            None => shelves.push((
                order,
                Shelf {
                    label,
                    classes: vec![item],
                },
            )),
        }
    }
    shelves.sort_by(|(a, _), (b, _)| a.cmp(b));
    shelves.into_iter().map(|(_, shelf)| shelf).collect()
}

fn name_band(item: &DrilldownItem) -> (i64, &'static str) {
    match item.value.chars().next() {
        Some(c) if c < 'F' => (0, "A〜E"),
        Some(c) if c < 'K' => (1, "F〜J"),
        Some(c) if c < 'P' => (2, "K〜O"),
        Some(c) if c < 'U' => (3, "P〜T"),
        _ => (4, "U〜Z"),
    }
}

/// Largest band first.
fn frequency_band(item: &DrilldownItem) -> (i64, &'static str) {
    match item.count {
        0..=100 => (3, "〜100件"),
        101..=200 => (2, "〜200件"),
        201..=300 => (1, "〜300件"),
        _ => (0, "300件〜"),
    }
}
