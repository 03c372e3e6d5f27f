// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-pass query executor.
//!
//! Pass 1 runs every facet except `version`. Its result is what the version
//! selector counts, so readers always see how many hits every version has.
//! Pass 2 narrows pass 1 to the pinned version and doubles each survivor's
//! score, which makes a version facet both a filter and a boost.
//!
//! Pass 2 reads pass 1's scores, so it always runs second.

use crate::error::Result;
use crate::query::Conditions;
use crate::store::{Boost, EntryStore, ResultTable};
use tracing::debug;

#[derive(Debug)]
pub struct Execution<R> {
    pub unscoped: R,
    /// Present only when a version was pinned.
    pub scoped: Option<R>,
}

impl<R> Execution<R> {
    /// The set the page is cut from.
    pub fn results(&self) -> &R {
        self.scoped.as_ref().unwrap_or(&self.unscoped)
    }
}

pub fn execute<'s, S>(store: &'s S, conditions: &Conditions) -> Result<Execution<S::Results<'s>>>
where
    S: EntryStore + ?Sized,
{
    let unscoped = store.select(&conditions.predicates)?;
    debug!(
        predicates = conditions.predicates.len(),
        hits = unscoped.len(),
        "unscoped pass"
    );

    let scoped = match &conditions.version {
        Some(version) => {
            let scoped = unscoped.refine(version, Boost::SelfScore)?;
            debug!(hits = scoped.len(), "version pass");
            Some(scoped)
        }
        None => None,
    };

    Ok(Execution { unscoped, scoped })
}
