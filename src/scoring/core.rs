// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind query ranking.
//!
//! A query word earns points for every field it matches, and the field weights
//! decide which entries float to the top. Matching the entry's own name should
//! always beat matching its owner, which should beat a mention in prose. The
//! weights are a strict ladder so those comparisons never invert.
//!
//! # Constants
//!
//! | Field                       | Weight | Match mode            |
//! |-----------------------------|--------|-----------------------|
//! | name                        | 1000   | exact                 |
//! | local_name, class/module/object | 500 | exact                |
//! | library                     | 200    | exact                 |
//! | normalized_class/module/object | 100 | NFKC + lowercase     |
//! | name_raw, local_name_raw    | 50     | case-insensitive substring |
//! | signature                   | 30     | case-insensitive substring |
//! | summary                     | 20     | case-insensitive substring |
//! | description                 | 10     | case-insensitive substring |
//! | document                    | 1      | case-insensitive substring |
//!
//! Every included hit also carries [`BASE_INCLUSION_SCORE`], so a pure filter
//! match still has a positive score for the version boost to double.

use crate::search::utils::normalize;
use crate::types::{Entry, EntryField};
use serde::{Serialize, Serializer};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

pub const NAME_WEIGHT: f64 = 1000.0;
pub const LOCAL_NAME_WEIGHT: f64 = 500.0;
pub const OWNER_WEIGHT: f64 = 500.0;
pub const LIBRARY_WEIGHT: f64 = 200.0;
pub const NORMALIZED_WEIGHT: f64 = 100.0;
pub const RAW_NAME_WEIGHT: f64 = 50.0;
pub const SIGNATURE_WEIGHT: f64 = 30.0;
pub const SUMMARY_WEIGHT: f64 = 20.0;
pub const DESCRIPTION_WEIGHT: f64 = 10.0;
pub const DOCUMENT_WEIGHT: f64 = 1.0;

/// Score every hit starts with before facet or query contributions.
pub const BASE_INCLUSION_SCORE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Whole-field equality with the word as typed.
    Exact,
    /// Equality after NFKC folding and lowercasing both sides.
    Normalized,
    /// Case-insensitive substring.
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeight {
    pub field: EntryField,
    pub weight: f64,
    pub mode: MatchMode,
}

const fn weighted(field: EntryField, weight: f64, mode: MatchMode) -> FieldWeight {
    FieldWeight { field, weight, mode }
}

/// The fields a query word is matched against, heaviest first.
pub const QUERY_FIELDS: [FieldWeight; 15] = [
    weighted(EntryField::Name, NAME_WEIGHT, MatchMode::Exact),
    weighted(EntryField::LocalName, LOCAL_NAME_WEIGHT, MatchMode::Exact),
    weighted(EntryField::Class, OWNER_WEIGHT, MatchMode::Exact),
    weighted(EntryField::Module, OWNER_WEIGHT, MatchMode::Exact),
    weighted(EntryField::Object, OWNER_WEIGHT, MatchMode::Exact),
    weighted(EntryField::Library, LIBRARY_WEIGHT, MatchMode::Exact),
    weighted(EntryField::NormalizedClass, NORMALIZED_WEIGHT, MatchMode::Normalized),
    weighted(EntryField::NormalizedModule, NORMALIZED_WEIGHT, MatchMode::Normalized),
    weighted(EntryField::NormalizedObject, NORMALIZED_WEIGHT, MatchMode::Normalized),
    weighted(EntryField::NameRaw, RAW_NAME_WEIGHT, MatchMode::Substring),
    weighted(EntryField::LocalNameRaw, RAW_NAME_WEIGHT, MatchMode::Substring),
    weighted(EntryField::Signature, SIGNATURE_WEIGHT, MatchMode::Substring),
    weighted(EntryField::Summary, SUMMARY_WEIGHT, MatchMode::Substring),
    weighted(EntryField::Description, DESCRIPTION_WEIGHT, MatchMode::Substring),
    weighted(EntryField::Document, DOCUMENT_WEIGHT, MatchMode::Substring),
];

/// A query word with its folded forms computed once at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    text: String,
    lowercase: String,
    normalized: String,
}

impl QueryWord {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lowercase = text.to_lowercase();
        let normalized = normalize(&text);
        Self {
            text,
            lowercase,
            normalized,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for QueryWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Does `value` match `word` under `mode`?
pub fn field_matches(mode: MatchMode, value: &str, word: &QueryWord) -> bool {
    match mode {
        MatchMode::Exact => value == word.text,
        MatchMode::Normalized => normalize(value) == word.normalized,
        MatchMode::Substring => value.to_lowercase().contains(&word.lowercase),
    }
}

/// Sum of the weights of every field `word` matches. Zero means no match.
pub fn word_score(entry: &Entry, word: &QueryWord) -> f64 {
    QUERY_FIELDS
        .iter()
        .filter(|fw| {
            entry
                .field(fw.field)
                .is_some_and(|value| field_matches(fw.mode, value, word))
        })
        .map(|fw| fw.weight)
        .sum()
}
