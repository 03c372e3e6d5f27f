// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "See also" links for the entries on a page.
//!
//! Two sources: an entry's owner (class, module or object) and its
//! `related_names`. An owner equal to the one already pinned is skipped,
//! since linking `/class:File/` from `/class:File/` goes nowhere.

use crate::facet::FacetKey;
use crate::params::{parameter_link_href, render_path, ParsedParameters};
use crate::query::parse_method_spec;
use crate::types::Entry;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    pub key: String,
    pub label: String,
    /// The facet the link narrows by.
    pub facet: FacetKey,
}

impl RelatedEntry {
    /// Link for this entry from the current search.
    ///
    /// When the same facet is already pinned the link replaces it, keeping
    /// every other parameter; otherwise it narrows the current search.
    pub fn href(&self, parsed: &ParsedParameters) -> String {
        if parsed.parameters.contains(self.facet) {
            let kept = parsed
                .ordered
                .iter()
                .filter(|(key, _)| *key != self.facet)
                .map(|(key, value)| (*key, value.as_str()));
            format!(
                "/{}{}",
                render_path(kept),
                parameter_link_href(self.facet, &self.key)
            )
        } else {
            format!("./{}", parameter_link_href(self.facet, &self.key))
        }
    }
}

/// Related entries of `entries`, deduplicated by key and sorted by key.
pub fn collect_related_entries<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    parsed: &ParsedParameters,
) -> Vec<RelatedEntry> {
    let mut related: BTreeMap<String, RelatedEntry> = BTreeMap::new();
    for entry in entries {
        if let Some((field, owner)) = entry.owner() {
            if let Some(facet) = FacetKey::from_owner_field(field) {
                if parsed.parameters.single(facet) != Some(owner) {
                    related.insert(owner.to_string(), related_entry(owner, facet));
                }
            }
        }
        for name in &entry.related_names {
            related.insert(name.clone(), related_entry(name, related_name_facet(name)));
        }
    }
    related.into_values().collect()
}

fn related_entry(name: &str, facet: FacetKey) -> RelatedEntry {
    RelatedEntry {
        key: name.to_string(),
        label: name.to_string(),
        facet,
    }
}

/// Method specs link through their own facet, anything else through a query.
fn related_name_facet(name: &str) -> FacetKey {
    match parse_method_spec(name).map(|spec| spec.mark) {
        Some("#") => FacetKey::InstanceMethod,
        Some(".") => FacetKey::SingletonMethod,
        Some(".#") => FacetKey::ModuleFunction,
        _ => FacetKey::Query,
    }
}
