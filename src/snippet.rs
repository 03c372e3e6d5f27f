// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-in-context snippets for result descriptions.
//!
//! Descriptions carry RD link markup (`[[c:File]]`), which is stripped to its
//! target text first. Each snippet is a window of at most `width` characters
//! around a keyword hit, HTML-escaped, with every keyword occurrence wrapped
//! in `<span class="keyword">`.

use crate::facet::FacetKey;
use crate::params::Parameters;
use regex::Regex;
use std::sync::LazyLock;

static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[.+?:(.+?)\]\]").expect("markup pattern is valid"));

pub const SNIPPET_WIDTH: usize = 300;
const MAX_SNIPPETS: usize = 3;
const OPEN_TAG: &str = "<span class=\"keyword\">";
const CLOSE_TAG: &str = "</span>";

/// `[[c:File]]` -> `File`
pub fn remove_markup(source: &str) -> String {
    MARKUP_RE.replace_all(source, "$1").into_owned()
}

/// Link targets in `source`, in order of appearance.
pub fn link_targets(source: &str) -> Vec<String> {
    MARKUP_RE
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone)]
pub struct Snippeter {
    keywords: Vec<Vec<char>>,
    width: usize,
}

impl Snippeter {
    /// Keywords are the query words plus every other pinned facet value.
    pub fn for_parameters(parameters: &Parameters) -> Self {
        let mut keywords: Vec<String> = parameters.query_words().to_vec();
        for key in FacetKey::ALL {
            if key == FacetKey::Query {
                continue;
            }
            if let Some(value) = parameters.single(key) {
                keywords.push(value.to_string());
            }
        }
        Self::new(keywords)
    }

    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<Vec<char>> = keywords
            .into_iter()
            .map(|k| k.as_ref().chars().map(fold).collect::<Vec<char>>())
            .filter(|k| !k.is_empty())
            .collect();
        // longest first, so `lstat` wins over `stat` at the same position
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keywords.dedup();
        Snippeter {
            keywords,
            width: SNIPPET_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Snippets for `description`, or none if no keyword occurs in it.
    pub fn execute(&self, description: &str) -> Vec<String> {
        let text: Vec<char> = remove_markup(description).chars().collect();
        let folded: Vec<char> = text.iter().map(|c| fold(*c)).collect();
        let hits = self.find_hits(&folded);

        let mut snippets = Vec::new();
        let mut covered_until = 0;
        for &(start, len) in &hits {
            if start < covered_until {
                continue;
            }
            if snippets.len() == MAX_SNIPPETS {
                break;
            }
            let padding = self.width.saturating_sub(len) / 2;
            let window_start = start.saturating_sub(padding);
            let window_end = (window_start + self.width).min(text.len());
            snippets.push(render(&text, window_start, window_end, &hits));
            covered_until = window_end;
        }
        snippets
    }

    /// Non-overlapping `(start, len)` keyword hits, left to right.
    fn find_hits(&self, folded: &[char]) -> Vec<(usize, usize)> {
        let mut hits = Vec::new();
        let mut i = 0;
        while i < folded.len() {
            let found = self
                .keywords
                .iter()
                .find(|k| folded[i..].starts_with(k.as_slice()));
            match found {
                Some(keyword) => {
                    hits.push((i, keyword.len()));
                    i += keyword.len();
                }
                None => i += 1,
            }
        }
        hits
    }
}

/// Single-char lowercase; multi-char foldings keep the original so offsets
/// stay aligned with the text.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn render(text: &[char], start: usize, end: usize, hits: &[(usize, usize)]) -> String {
    let mut out = String::new();
    let mut i = start;
    let mut hits = hits.iter().filter(|(s, _)| *s >= start && *s < end).peekable();
    while i < end {
        if let Some(&&(hit_start, len)) = hits.peek() {
            if hit_start == i {
                let hit_end = (i + len).min(end);
                out.push_str(OPEN_TAG);
                escape_into(&mut out, &text[i..hit_end]);
                out.push_str(CLOSE_TAG);
                i = hit_end;
                hits.next();
                continue;
            }
        }
        escape_into(&mut out, &text[i..i + 1]);
        i += 1;
    }
    out
}

fn escape_into(out: &mut String, chars: &[char]) {
    for &c in chars {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
