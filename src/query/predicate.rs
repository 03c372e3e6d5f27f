// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Predicates: the compiled form of one facet or of the whole query.
//!
//! A predicate is data, not a closure. It can be logged, compared in tests,
//! and interpreted by any [`EntryStore`](crate::store::EntryStore) against
//! its own storage.
//!
//! Evaluating a predicate against an entry answers two questions at once:
//! `None` means the entry is excluded, `Some(score)` means it is included and
//! contributes `score` to its ranking. Pure filters contribute `0.0`.

use crate::scoring::{word_score, QueryWord};
use crate::types::{Entry, EntryField};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Predicate {
    Equals {
        field: EntryField,
        value: String,
    },
    /// Equal to `value`, or starting with it (`net` matches `net/http`).
    PrefixOrEquals {
        field: EntryField,
        value: String,
    },
    AnyOf(Vec<Predicate>),
    /// Conjunctive weighted match: every term has to match somewhere.
    WeightedMatch {
        terms: Vec<MatchTerm>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchTerm {
    Word(QueryWord),
    /// A `Class#method` style word: matches literally, or split.
    MethodSpec {
        literal: QueryWord,
        constant: QueryWord,
        method: QueryWord,
    },
}

impl Predicate {
    pub fn equals(field: EntryField, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn prefix_or_equals(field: EntryField, value: impl Into<String>) -> Self {
        Predicate::PrefixOrEquals {
            field,
            value: value.into(),
        }
    }

    pub fn evaluate(&self, entry: &Entry) -> Option<f64> {
        match self {
            Predicate::Equals { field, value } => {
                (entry.field(*field) == Some(value.as_str())).then_some(0.0)
            }
            Predicate::PrefixOrEquals { field, value } => entry
                .field(*field)
                .filter(|actual| actual.starts_with(value.as_str()))
                .map(|_| 0.0),
            Predicate::AnyOf(alternatives) => alternatives
                .iter()
                .filter_map(|alternative| alternative.evaluate(entry))
                .reduce(f64::max),
            Predicate::WeightedMatch { terms } => {
                let mut total = 0.0;
                for term in terms {
                    let score = term.score(entry);
                    if score <= 0.0 {
                        return None;
                    }
                    total += score;
                }
                Some(total)
            }
        }
    }
}

impl MatchTerm {
    pub fn word(text: impl Into<String>) -> Self {
        MatchTerm::Word(QueryWord::new(text))
    }

    /// The word as the reader typed it.
    pub fn text(&self) -> &str {
        match self {
            MatchTerm::Word(word) => word.as_str(),
            MatchTerm::MethodSpec { literal, .. } => literal.as_str(),
        }
    }

    /// Weighted score of this term; `0.0` means it does not match.
    ///
    /// For method specs the literal branch and the split branch are scored
    /// independently and added, so an entry matching both ranks higher.
    pub fn score(&self, entry: &Entry) -> f64 {
        match self {
            MatchTerm::Word(word) => word_score(entry, word),
            MatchTerm::MethodSpec {
                literal,
                constant,
                method,
            } => word_score(entry, literal) + expansion_score(entry, constant, method),
        }
    }
}

fn expansion_score(entry: &Entry, constant: &QueryWord, method: &QueryWord) -> f64 {
    let constant_score = word_score(entry, constant);
    if constant_score <= 0.0 {
        return 0.0;
    }
    let method_score = word_score(entry, method);
    if method_score <= 0.0 {
        return 0.0;
    }
    constant_score + method_score
}
