// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline, end to end.
//!
//! ```text
//! path ─► normalize? ─► parse ─► compile ─► execute (2 passes)
//!                                              │
//!            ┌─────────────────────────────────┤
//!            ▼                                 ▼
//!     rank ─► page window ─► group       drilldowns, related keywords,
//!                                        version counts
//! ```
//!
//! Everything a page needs is collected into [`SearchOutcome`] before the
//! execution is dropped, so the store's tables are released when `search`
//! returns, on success and on error alike.

pub mod executor;
pub mod group;
pub mod utils;

pub use executor::{execute, Execution};
pub use group::{group_entries, Group, RankedEntry};

use crate::config::SearchConfig;
use crate::drilldown::{drilldowns, related_keywords, version_counts, Drilldown, DrilldownItem, VersionCount};
use crate::error::Result;
use crate::facet::FacetKey;
use crate::paginate::{ensure_page, resolve_page_size, Pagination};
use crate::params::{normalize_path, parse_path, ParsedParameters};
use crate::query::{compile, Conditions};
use crate::store::{EntryStore, ResultTable};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One incoming request: the facet path plus the two query-string knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub path: String,
    pub page: Option<String>,
    pub n_entries: Option<String>,
}

impl SearchRequest {
    pub fn new(path: impl Into<String>) -> Self {
        SearchRequest {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_n_entries(mut self, n_entries: impl Into<String>) -> Self {
        self.n_entries = Some(n_entries.into());
        self
    }
}

#[derive(Debug)]
pub struct SearchOutcome<'s> {
    pub parsed: ParsedParameters,
    pub conditions: Conditions,
    /// The current page, grouped by label.
    pub groups: Vec<Group<'s>>,
    pub drilldowns: Vec<Drilldown>,
    pub related_keywords: Vec<DrilldownItem>,
    /// Counted before the version filter.
    pub versions: Vec<VersionCount>,
    /// Hits after every facet, version included.
    pub total: usize,
    pub pagination: Pagination,
    pub elapsed: Duration,
}

impl SearchOutcome<'_> {
    pub fn pinned_version(&self) -> Option<&str> {
        self.parsed.parameters.single(FacetKey::Version)
    }
}

pub fn search<'s, S>(
    store: &'s S,
    config: &SearchConfig,
    request: &SearchRequest,
) -> Result<SearchOutcome<'s>>
where
    S: EntryStore + ?Sized,
{
    let start = Instant::now();

    let path = if config.normalize_path {
        normalize_path(&request.path)
    } else {
        request.path.clone()
    };
    let parsed = parse_path(&path, config.decoding())?;
    let conditions = compile(&parsed.parameters);
    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!(
            conditions = %serde_json::to_string(&conditions)?,
            "compiled"
        );
    }

    let execution = execute(store, &conditions)?;
    let results = execution.results();
    let total = results.len();

    let page_size = resolve_page_size(request.n_entries.as_deref());
    let page = ensure_page(total, request.page.as_deref(), page_size);
    let pagination = Pagination::new(total, page, page_size);

    let ranked = results.ranked();
    let window = pagination.window().range(ranked.len());
    let page_entries = ranked[window].iter().filter_map(|hit| {
        results.entry(hit).map(|entry| RankedEntry { entry, hit: *hit })
    });
    let groups = group_entries(page_entries);

    let drilldowns = drilldowns(&parsed.parameters, results);
    let related_keywords = related_keywords(&parsed.parameters, results);
    let versions = version_counts(
        &execution.unscoped,
        parsed.parameters.single(FacetKey::Version),
    );
    drop(execution);

    let elapsed = start.elapsed();
    info!(
        path = %parsed.to_path(),
        total,
        page,
        groups = groups.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "search"
    );

    Ok(SearchOutcome {
        parsed,
        conditions,
        groups,
        drilldowns,
        related_keywords,
        versions,
        total,
        pagination,
        elapsed,
    })
}
