// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A store paired with the settings it is served under.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::{search, SearchOutcome, SearchRequest};
use crate::store::EntryStore;

#[derive(Debug)]
pub struct SearchContext<S: EntryStore> {
    store: S,
    config: SearchConfig,
}

impl<S: EntryStore> SearchContext<S> {
    pub fn new(store: S, config: SearchConfig) -> Self {
        SearchContext { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&self, request: &SearchRequest) -> Result<SearchOutcome<'_>> {
        search(&self.store, &self.config, request)
    }
}
