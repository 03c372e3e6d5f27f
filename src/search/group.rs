// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapsing runs of same-label hits into display groups.
//!
//! The same method usually exists in several manual versions, and those
//! entries share a label and tend to rank next to each other. Showing them as
//! one group with a version list reads far better than five identical rows.
//!
//! Grouping is adjacency-only. `[A, A, B, A]` yields three groups, not two:
//! a global regroup would pull the last `A` up past `B` and break rank order.
//!
//! **Invariant**: concatenating the groups' members (before their version
//! sort) gives back the ranked input exactly.
//!
//! **Verified by**:
//! - `prop_grouping_preserves_entries` (tests/property/grouping.rs)

use crate::search::utils::compare_versions;
use crate::types::{Entry, Hit};
use serde::Serialize;

/// An entry together with the hit that ranked it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry<'s> {
    pub entry: &'s Entry,
    #[serde(skip)]
    pub hit: Hit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<'s> {
    /// The highest-ranked member.
    pub representative: RankedEntry<'s>,
    /// Every member, version ascending.
    pub members: Vec<RankedEntry<'s>>,
}

impl<'s> Group<'s> {
    pub fn label(&self) -> &'s str {
        &self.representative.entry.label
    }
}

pub fn group_entries<'s>(ranked: impl IntoIterator<Item = RankedEntry<'s>>) -> Vec<Group<'s>> {
    let mut groups: Vec<Group<'s>> = Vec::new();
    for item in ranked {
        match groups.last_mut() {
            Some(group) if group.label() == item.entry.label => group.members.push(item),
            _ => groups.push(Group {
                representative: item,
                members: vec![item],
            }),
        }
    }
    for group in &mut groups {
        // stable, so equal versions keep rank order
        group
            .members
            .sort_by(|a, b| compare_versions(&a.entry.version, &b.entry.version));
    }
    groups
}
