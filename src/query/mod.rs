// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compiling facet parameters into predicates.
//!
//! Each facet becomes an independent filter; the query words become a single
//! weighted match. `version` is the odd one out: it is held back from the
//! main predicate list so the executor can run it as a second pass that both
//! narrows and boosts.
//!
//! ```text
//! /type:instance-method/class:String/version:3.0.0/
//!
//!   predicates: [type == "instance-method", class == "String"]
//!   version:    version == "3.0.0"
//! ```

pub mod predicate;

pub use predicate::{MatchTerm, Predicate};

use crate::facet::FacetKey;
use crate::params::{ParameterValue, Parameters};
use crate::scoring::QueryWord;
use crate::types::EntryField;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static METHOD_SPEC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<constant>[A-Z]\w*(?:::[A-Z]\w*)*)(?P<mark>\.#|#|\.)(?P<method>[a-z_]\w*[!?=]?)$")
        .expect("method spec pattern is valid")
});

/// Compiled conditions for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Conditions {
    pub predicates: Vec<Predicate>,
    pub version: Option<Predicate>,
}

/// A `Class#method`-style word split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec<'a> {
    pub constant: &'a str,
    /// `#`, `.` or `.#`
    pub mark: &'a str,
    pub method: &'a str,
}

pub fn parse_method_spec(word: &str) -> Option<MethodSpec<'_>> {
    let captures = METHOD_SPEC_RE.captures(word)?;
    Some(MethodSpec {
        constant: captures.name("constant")?.as_str(),
        mark: captures.name("mark")?.as_str(),
        method: captures.name("method")?.as_str(),
    })
}

pub fn compile(parameters: &Parameters) -> Conditions {
    let mut conditions = Conditions::default();
    for (key, value) in parameters.iter() {
        match (key, value) {
            (FacetKey::Query, ParameterValue::Words(words)) => {
                if !words.is_empty() {
                    conditions.predicates.push(compile_query(words));
                }
            }
            (FacetKey::Version, ParameterValue::Single(version)) => {
                conditions.version = Some(Predicate::equals(EntryField::Version, version));
            }
            (FacetKey::Library, ParameterValue::Single(library)) => {
                conditions
                    .predicates
                    .push(Predicate::prefix_or_equals(EntryField::Library, library));
            }
            (_, ParameterValue::Single(value)) => {
                if let Some(entry_type) = key.scoped_type() {
                    conditions
                        .predicates
                        .push(Predicate::equals(EntryField::Type, entry_type.as_str()));
                    conditions.predicates.push(scoped_identifier(value));
                } else if let Some(field) = key.field() {
                    conditions.predicates.push(Predicate::equals(field, value));
                }
            }
            (_, ParameterValue::Words(_)) => {}
        }
    }
    conditions
}

/// One conjunctive weighted match over every query word.
pub fn compile_query(words: &[String]) -> Predicate {
    let terms = words
        .iter()
        .map(|word| match parse_method_spec(word) {
            Some(spec) => MatchTerm::MethodSpec {
                literal: QueryWord::new(word.as_str()),
                constant: QueryWord::new(spec.constant),
                method: QueryWord::new(spec.method),
            },
            None => MatchTerm::word(word.as_str()),
        })
        .collect();
    Predicate::WeightedMatch { terms }
}

/// `instance-method:File#lstat` names the entry by its full or local name.
fn scoped_identifier(value: &str) -> Predicate {
    Predicate::AnyOf(vec![
        Predicate::equals(EntryField::Name, value),
        Predicate::equals(EntryField::LocalName, value),
    ])
}
