// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Re-escaping paths that a front proxy has already unescaped.
//!
//! Once `/library:net%2Fhttp/` has been turned into `/library:net/http/` the
//! slash inside the value is indistinguishable from a segment separator. The
//! only boundaries we can trust are `/<known-key>:`, so values are cut there
//! and escaped again.

use crate::facet::FacetKey;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const OPEN_SEARCH_DESCRIPTION: &str = "/open_search_description.xml";

/// Form encoding: unreserved `* - . _` stay, space becomes `+`.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub fn normalize_path(path: &str) -> String {
    if path.ends_with(OPEN_SEARCH_DESCRIPTION) {
        return path.to_string();
    }
    let boundaries = key_boundaries(path);
    let Some(&(first_start, _)) = boundaries.first() else {
        return path.to_string();
    };

    let mut normalized = String::with_capacity(path.len() + 8);
    normalized.push_str(&path[..first_start]);
    for (i, &(start, value_start)) in boundaries.iter().enumerate() {
        let value = match boundaries.get(i + 1) {
            Some(&(next_start, _)) => &path[value_start..next_start],
            None => {
                let tail = &path[value_start..];
                tail.strip_suffix('/').unwrap_or(tail)
            }
        };
        normalized.push_str(&path[start..value_start]);
        normalized.push_str(&form_encode(value));
    }
    normalized.push('/');
    normalized
}

/// `(start of "/key:", start of value)` for every known-key boundary.
fn key_boundaries(path: &str) -> Vec<(usize, usize)> {
    path.match_indices('/')
        .filter_map(|(start, _)| {
            let rest = &path[start + 1..];
            FacetKey::ALL.into_iter().find_map(|key| {
                let name = key.as_str();
                let matches = rest.starts_with(name) && rest[name.len()..].starts_with(':');
                matches.then_some((start, start + 1 + name.len() + 1))
            })
        })
        .collect()
}

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}
