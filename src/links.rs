// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Titles and navigation hrefs derived from the reader's parameters.
//!
//! All hrefs are built from [`ParsedParameters::ordered`], so links keep the
//! facet order the reader chose.

use crate::facet::{value_label, FacetKey};
use crate::params::{encode_value, render_path, ParsedParameters};
use serde::Serialize;

pub use crate::params::parameter_link_href;

pub const SITE_TITLE: &str = "るりまサーチ";

/// `バージョン:2.7.0` style label for one parameter.
pub fn parameter_link_label(key: FacetKey, value: &str) -> String {
    format!("{}:{}", key.label(), value_label(key, value))
}

/// `クエリ:foo > 種類:クラス | るりまサーチ`
pub fn title(parsed: &ParsedParameters) -> String {
    if parsed.is_empty() {
        return SITE_TITLE.to_string();
    }
    let labels: Vec<String> = parsed
        .ordered
        .iter()
        .map(|(key, value)| parameter_link_label(*key, value))
        .collect();
    format!("{} | {}", labels.join(" > "), SITE_TITLE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSelect<'a> {
    All,
    Version(&'a str),
}

/// Search path with the version facet swapped for `select`.
pub fn version_select_href(parsed: &ParsedParameters, select: VersionSelect<'_>) -> String {
    let kept = parsed
        .ordered
        .iter()
        .filter(|(key, _)| *key != FacetKey::Version)
        .map(|(key, value)| (*key, value.as_str()));
    let mut path = format!("/{}", render_path(kept));
    if let VersionSelect::Version(version) = select {
        path.push_str(&parameter_link_href(FacetKey::Version, version));
    }
    path
}

/// Relative link narrowing the current search to one version.
pub fn entry_version_href(version: &str) -> String {
    format!("./version:{}/", encode_value(version))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicPathElement {
    pub key: FacetKey,
    pub key_label: &'static str,
    pub value: String,
    pub value_label: String,
    /// Back-link to the search up to this element; the last one has none.
    pub href: Option<String>,
    /// The current search with this element dropped.
    pub remove_href: String,
}

/// Breadcrumbs for the ordered parameters.
pub fn topic_path(parsed: &ParsedParameters) -> Vec<TopicPathElement> {
    let n = parsed.ordered.len();
    parsed
        .ordered
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let is_last = i + 1 == n;
            TopicPathElement {
                key: *key,
                key_label: key.label(),
                value: value.clone(),
                value_label: value_label(*key, value),
                href: (!is_last).then(|| format!("./{}", "../".repeat(n - i - 1))),
                remove_href: condition_remove_href(parsed, i),
            }
        })
        .collect()
}

fn condition_remove_href(parsed: &ParsedParameters, index: usize) -> String {
    let after = &parsed.ordered[index + 1..];
    let mut href = "../".repeat(after.len() + 1);
    href.push_str(&render_path(
        after.iter().map(|(key, value)| (*key, value.as_str())),
    ));
    href
}
