// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning `/key:value/key:value/` paths into facet parameters.
//!
//! The path grammar is tiny, but the rules around it are easy to get subtly
//! wrong, so they all live here:
//!
//! - split each segment on the *first* colon (`class:Net::HTTP` is one value)
//! - unknown keys are dropped, never reported
//! - a known key with nothing after the colon is a client error
//! - `query` accumulates words across segments, every other key keeps its
//!   first value
//!
//! Decoding is percent-decoding followed by `+` to space and a trim. Some
//! front ends encode paths twice; that is a deployment fact, so it arrives as
//! a [`Decoding`] value from configuration instead of being guessed here.

mod normalize;

pub use normalize::normalize_path;

use crate::error::{Result, SearchError};
use crate::facet::FacetKey;
use indexmap::IndexMap;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::debug;

/// Everything but unreserved characters, the way `ERB::Util#url_encode`
/// renders link values.
pub(crate) const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    #[default]
    Single,
    /// The front end has percent-encoded the path twice.
    Double,
}

impl Decoding {
    pub fn from_flag(double_decode: bool) -> Self {
        if double_decode {
            Decoding::Double
        } else {
            Decoding::Single
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Words(Vec<String>),
    Single(String),
}

/// Insertion-ordered facet parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    map: IndexMap<FacetKey, ParameterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decoded value. Returns `false` when the value was not newly
    /// accepted (a repeated single-valued key).
    pub fn accept(&mut self, key: FacetKey, value: &str) -> bool {
        if key == FacetKey::Query {
            let words = value.split_whitespace().map(str::to_string);
            match self.map.get_mut(&key) {
                Some(ParameterValue::Words(existing)) => existing.extend(words),
                _ => {
                    self.map.insert(key, ParameterValue::Words(words.collect()));
                }
            }
            return true;
        }
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, ParameterValue::Single(value.to_string()));
        true
    }

    pub fn get(&self, key: FacetKey) -> Option<&ParameterValue> {
        self.map.get(&key)
    }

    /// The value of a single-valued key.
    pub fn single(&self, key: FacetKey) -> Option<&str> {
        match self.map.get(&key) {
            Some(ParameterValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn query_words(&self) -> &[String] {
        match self.map.get(&FacetKey::Query) {
            Some(ParameterValue::Words(words)) => words,
            _ => &[],
        }
    }

    pub fn contains(&self, key: FacetKey) -> bool {
        self.map.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacetKey, &ParameterValue)> {
        self.map.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Result of parsing a path: the map plus the order the reader wrote it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParameters {
    pub parameters: Parameters,
    pub ordered: Vec<(FacetKey, String)>,
}

impl ParsedParameters {
    /// Render the ordered parameters back into path form,
    /// `key:value/key:value/`.
    pub fn to_path(&self) -> String {
        render_path(self.ordered.iter().map(|(key, value)| (*key, value.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// `key:<escaped value>/`, the unit every link in the UI is built from.
pub fn parameter_link_href(key: FacetKey, value: &str) -> String {
    format!("{}:{}/", key.as_str(), encode_value(value))
}

pub(crate) fn render_path<'a>(parameters: impl IntoIterator<Item = (FacetKey, &'a str)>) -> String {
    parameters
        .into_iter()
        .map(|(key, value)| parameter_link_href(key, value))
        .collect()
}

pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

/// Turn `+` into spaces, percent-decode (once or twice) and trim.
///
/// Only a literal `+` is a space. An encoded `%2B` decodes to `+` and stays.
pub fn decode_value(raw: &str, decoding: Decoding) -> String {
    let spaced = raw.replace('+', " ");
    let mut decoded = percent_decode_str(&spaced).decode_utf8_lossy().into_owned();
    if decoding == Decoding::Double {
        decoded = percent_decode_str(&decoded).decode_utf8_lossy().into_owned();
    }
    decoded.trim().to_string()
}

/// Parse raw `key:value` segments.
///
/// Fails with [`SearchError::MalformedParameter`] on a segment without a
/// colon or a known key without a value. Unknown keys are skipped.
pub fn parse<I, S>(segments: I, decoding: Decoding) -> Result<ParsedParameters>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedParameters::default();
    for segment in segments {
        let segment = segment.as_ref();
        let Some((raw_key, raw_value)) = segment.split_once(':') else {
            return Err(SearchError::malformed(segment));
        };
        let Some(key) = FacetKey::parse(raw_key) else {
            debug!(key = raw_key, "ignoring unknown parameter");
            continue;
        };
        if raw_value.is_empty() {
            return Err(SearchError::malformed(raw_key));
        }
        let value = decode_value(raw_value, decoding);
        if value.is_empty() {
            return Err(SearchError::malformed(raw_key));
        }
        if parsed.parameters.accept(key, &value) {
            parsed.ordered.push((key, value));
        } else {
            debug!(key = raw_key, "dropping repeated parameter");
        }
    }
    Ok(parsed)
}

/// Split a request path on `/` and parse its non-empty segments.
pub fn parse_path(path: &str, decoding: Decoding) -> Result<ParsedParameters> {
    parse(path.split('/').filter(|segment| !segment.is_empty()), decoding)
}
