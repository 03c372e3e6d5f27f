// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search pipeline.
//!
//! Two kinds of failure matter to callers: the client sent a path we refuse to
//! interpret (`MalformedParameter`, a 400), or the entry store could not answer
//! (`StoreUnavailable`, a 503). Everything else is an infrastructure problem
//! surfaced as-is.
//!
//! Note what is *not* here: a bad `page` or `n_entries` query parameter. Those
//! fall back to defaults in `paginate` and never produce an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("malformed parameter: {key}")]
    MalformedParameter { key: String },

    #[error("entry store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("invalid corpus: {0}")]
    Corpus(#[from] CorpusError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub fn malformed(key: impl Into<String>) -> Self {
        SearchError::MalformedParameter { key: key.into() }
    }

    /// HTTP status an outer server layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            SearchError::MalformedParameter { .. } => 400,
            SearchError::StoreUnavailable(_) => 503,
            _ => 500,
        }
    }
}

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Closed => SearchError::StoreUnavailable("store is closed".to_string()),
            StoreError::Backend(msg) => SearchError::StoreUnavailable(msg),
        }
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        SearchError::Config(err.to_string())
    }
}

/// Failures raised by an [`EntryStore`](crate::store::EntryStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entry store has been closed")]
    Closed,

    #[error("entry store backend error: {0}")]
    Backend(String),
}

/// Problems found while loading documentation records.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry {key} has more than one owner (class/module/object)")]
    ConflictingOwner { key: String },

    #[error("entry {key} has a negative score")]
    NegativeScore { key: String },

    #[error("duplicate entry key {key}")]
    DuplicateKey { key: String },

    #[error("entry {key} has unknown type {value:?}")]
    UnknownType { key: String, value: String },

    #[error("unsupported manifest version {0}")]
    UnsupportedManifest(u32),
}

pub type Result<T> = std::result::Result<T, SearchError>;
