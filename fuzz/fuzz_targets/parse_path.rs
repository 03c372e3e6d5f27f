// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request paths under adversarial input.
//!
//! Paths come straight from the URL, so anything goes: stray colons, broken
//! percent escapes, invalid UTF-8 after decoding. Parsing may refuse a path
//! but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rurema_search::{normalize_path, parse_path, Decoding, SearchError};

fuzz_target!(|data: &[u8]| {
    let path = String::from_utf8_lossy(data);

    for decoding in [Decoding::Single, Decoding::Double] {
        match parse_path(&path, decoding) {
            Ok(parsed) => {
                // every recorded parameter has a value
                assert!(parsed.ordered.iter().all(|(_, value)| !value.is_empty()));
                // rendering and parsing again is stable
                if decoding == Decoding::Single {
                    let again = parse_path(&parsed.to_path(), Decoding::Single)
                        .expect("rendered path parses");
                    assert_eq!(again.to_path(), parsed.to_path());
                }
            }
            Err(SearchError::MalformedParameter { .. }) => {}
            Err(other) => panic!("unexpected error kind: {}", other),
        }
    }

    let normalized = normalize_path(&path);
    let _ = parse_path(&normalized, Decoding::Single);
});
