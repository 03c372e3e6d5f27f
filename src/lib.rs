// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Faceted search over Ruby reference manual entries.
//!
//! A request is a path of `key:value` segments (`/version:2.7.0/class:File/
//! query:lstat/`). Each segment narrows the results along one facet; the
//! query words are matched against names, signatures and descriptions with
//! per-field weights.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  params/    │────▶│   query/     │────▶│   search/    │
//! │ (parse_path,│     │  (compile,   │     │ (execute,    │
//! │  normalize) │     │  Predicate)  │     │  group)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌──────────────┬──────────────┬──────────┤
//!        ▼              ▼              ▼          ▼
//! ┌────────────┐ ┌────────────┐ ┌───────────┐ ┌──────────┐
//! │  store/    │ │ paginate   │ │ drilldown │ │ response │
//! │ (EntryStore│ │ (Window,   │ │ (facets,  │ │ (JSON    │
//! │  leases)   │ │  links)    │ │  versions)│ │  view)   │
//! └────────────┘ └────────────┘ └───────────┘ └──────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use rurema_search::{corpus, SearchConfig, SearchContext, SearchRequest};
//!
//! let store = corpus::load_corpus("corpus/".as_ref())?;
//! let context = SearchContext::new(store, SearchConfig::default());
//! let outcome = context.search(&SearchRequest::new("/version:3.0.0/query:lstat/"))?;
//! for group in &outcome.groups {
//!     println!("{}", group.label());
//! }
//! ```

pub mod config;
pub mod context;
pub mod corpus;
pub mod drilldown;
pub mod error;
pub mod facet;
pub mod links;
pub mod overview;
pub mod paginate;
pub mod params;
pub mod query;
pub mod related;
pub mod response;
pub mod scoring;
pub mod search;
pub mod snippet;
pub mod store;
pub mod testing;
pub mod types;
pub mod url;

pub use config::{DocumentConfig, SearchConfig};
pub use context::SearchContext;
pub use error::{CorpusError, Result, SearchError, StoreError};
pub use facet::FacetKey;
pub use params::{normalize_path, parse_path, Decoding, ParsedParameters, Parameters};
pub use query::{compile, Conditions, Predicate};
pub use response::{build_response, SearchResponse};
pub use search::{search, SearchOutcome, SearchRequest};
pub use store::{EntryStore, MemoryStore, ResultSet, ResultTable};
pub use types::{Entry, EntryField, EntryId, EntryType, Hit};
