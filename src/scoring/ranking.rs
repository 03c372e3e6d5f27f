// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how hits get sorted.
//!
//! Score descending, then label ascending. The label tiebreak is what keeps
//! page 2 of a query the same across repeated requests; the store id after it
//! only matters when two entries render identically, which happens across
//! manual versions.

use crate::types::{Entry, Hit};
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Label** - alphabetical, for stable pagination
/// 3. **Entry id** - final tie-breaker when everything else is equal
pub fn compare_hits(a: &Hit, b: &Hit, entries: &[Entry]) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| {
        let a_label = entries.get(a.id.as_usize()).map_or("", |e| e.label.as_str());
        let b_label = entries.get(b.id.as_usize()).map_or("", |e| e.label.as_str());
        a_label.cmp(b_label).then_with(|| a.id.cmp(&b.id))
    })
}

/// Sort hits in place into ranking order.
pub fn rank_hits(hits: &mut [Hit], entries: &[Entry]) {
    hits.sort_by(|a, b| compare_hits(a, b, entries));
}
