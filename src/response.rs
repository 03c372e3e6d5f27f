// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable view of a [`SearchOutcome`].
//!
//! This is what a rendering layer consumes: every href is resolved, every
//! label is the display label, and snippets are ready-escaped HTML.

use crate::config::SearchConfig;
use crate::drilldown::{DrilldownItem, VersionCount};
use crate::facet::{type_label, FacetKey};
use crate::links::{entry_version_href, title, topic_path, version_select_href, TopicPathElement, VersionSelect};
use crate::paginate::PageLink;
use crate::params::{parameter_link_href, Parameters};
use crate::related::collect_related_entries;
use crate::search::{Group, SearchOutcome};
use crate::snippet::Snippeter;
use crate::types::EntryType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub title: String,
    pub parameters: Parameters,
    pub topic_path: Vec<TopicPathElement>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub n_pages: usize,
    pub elapsed_seconds: f64,
    pub groups: Vec<GroupView>,
    pub drilldowns: Vec<DrilldownView>,
    pub related_keywords: Vec<LinkView>,
    pub versions: Vec<VersionView>,
    pub pages: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    pub label: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub type_label: &'static str,
    pub href: String,
    pub summary: Option<String>,
    pub snippets: Vec<String>,
    pub versions: Vec<EntryVersionView>,
    pub related_entries: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryVersionView {
    pub version: String,
    pub selected: bool,
    pub href: String,
    /// The manual page of this version's entry.
    pub document_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrilldownView {
    pub key: FacetKey,
    pub key_label: &'static str,
    pub items: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionView {
    /// `None` for the "all versions" entry.
    pub version: Option<String>,
    pub label: String,
    pub count: usize,
    pub selected: bool,
    pub href: String,
}

pub fn build_response(outcome: &SearchOutcome<'_>, config: &SearchConfig) -> SearchResponse {
    let parsed = &outcome.parsed;
    let pinned = outcome.pinned_version();
    let snippeter = Snippeter::for_parameters(&parsed.parameters);

    let groups = outcome
        .groups
        .iter()
        .map(|group| group_view(group, outcome, config, &snippeter))
        .collect();

    let drilldowns = outcome
        .drilldowns
        .iter()
        .map(|drilldown| DrilldownView {
            key: drilldown.key,
            key_label: drilldown.key.label(),
            items: drilldown
                .items
                .iter()
                .zip(drilldown.labels())
                .map(|(item, label)| LinkView {
                    label,
                    href: format!("./{}", parameter_link_href(drilldown.key, &item.value)),
                    count: Some(item.count),
                })
                .collect(),
        })
        .collect();

    let related_keywords = outcome
        .related_keywords
        .iter()
        .map(|DrilldownItem { value, count }| LinkView {
            label: value.clone(),
            href: format!("./{}", parameter_link_href(FacetKey::Query, value)),
            count: Some(*count),
        })
        .collect();

    let all_count: usize = outcome.versions.iter().map(|v| v.count).sum();
    let mut versions = vec![VersionView {
        version: None,
        label: "すべて".to_string(),
        count: all_count,
        selected: pinned.is_none(),
        href: version_select_href(parsed, VersionSelect::All),
    }];
    versions.extend(outcome.versions.iter().map(|VersionCount { version, count, selected }| {
        VersionView {
            version: Some(version.clone()),
            label: version.clone(),
            count: *count,
            selected: *selected,
            href: version_select_href(parsed, VersionSelect::Version(version)),
        }
    }));

    SearchResponse {
        title: title(parsed),
        parameters: parsed.parameters.clone(),
        topic_path: topic_path(parsed),
        total: outcome.total,
        page: outcome.pagination.current_page,
        page_size: outcome.pagination.page_size,
        n_pages: outcome.pagination.n_pages,
        elapsed_seconds: outcome.elapsed.as_secs_f64(),
        groups,
        drilldowns,
        related_keywords,
        versions,
        pages: outcome.pagination.links(),
    }
}

fn group_view(
    group: &Group<'_>,
    outcome: &SearchOutcome<'_>,
    config: &SearchConfig,
    snippeter: &Snippeter,
) -> GroupView {
    let entry = group.representative.entry;
    let pinned = outcome.pinned_version();
    let mapper = config.url_mapper(&entry.version);

    let snippets = entry
        .description
        .as_deref()
        .map(|description| snippeter.execute(description))
        .unwrap_or_default();

    let versions = group
        .members
        .iter()
        .map(|member| EntryVersionView {
            version: member.entry.version.clone(),
            selected: pinned == Some(member.entry.version.as_str()),
            href: entry_version_href(&member.entry.version),
            document_href: config.url_mapper(&member.entry.version).entry_url(member.entry),
        })
        .collect();

    let related_entries = collect_related_entries([entry], &outcome.parsed)
        .into_iter()
        .map(|related| LinkView {
            href: related.href(&outcome.parsed),
            label: related.label,
            count: None,
        })
        .collect();

    GroupView {
        label: group.label().to_string(),
        entry_type: entry.entry_type,
        type_label: type_label(entry.entry_type),
        href: mapper.entry_url(entry),
        summary: entry.summary.clone(),
        snippets,
        versions,
        related_entries,
    }
}
