// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole searches over the sample manual with arbitrary requests.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rurema_search::testing::sample_context;
use rurema_search::{EntryStore, MemoryStore, SearchContext, SearchRequest};
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Input {
    path: String,
    page: Option<String>,
    n_entries: Option<String>,
}

fuzz_target!(|input: Input| {
    static CONTEXT: OnceLock<SearchContext<MemoryStore>> = OnceLock::new();
    let context = CONTEXT.get_or_init(sample_context);

    let path: String = input.path.chars().take(200).collect();
    let mut request = SearchRequest::new(path);
    request.page = input.page;
    request.n_entries = input.n_entries;

    if let Ok(outcome) = context.search(&request) {
        let window = outcome.pagination.window();
        assert!(window.offset == 0 || window.offset < outcome.total);
        let shown: usize = outcome.groups.iter().map(|g| g.members.len()).sum();
        assert!(shown <= window.limit);
        assert!(outcome.total == 0 || shown > 0);
        assert!(outcome.pagination.current_page >= 1);
        assert!(outcome.pagination.current_page <= outcome.pagination.n_pages);
    }
    assert_eq!(context.store().open_tables().count(), 0);
});
