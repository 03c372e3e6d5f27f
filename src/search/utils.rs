// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! The boring-but-essential functions every stage needs: folding names for
//! comparison and ordering manual versions the way people read them.

use std::cmp::Ordering;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a string for comparison: NFKC, then lowercase.
///
/// NFKC maps full-width forms onto ASCII, so `Ｓｔｒｉｎｇ` and `string` fold
/// to the same key.
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize("Net::HTTP"), "net::http");
/// ```
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value.nfkc().collect::<String>().to_lowercase()
}

/// Lowercase only, for builds without the unicode-normalization feature.
/// Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Compare two version strings numerically where both sides have digits.
///
/// `1.9.2` < `1.10.0`. A version that is a prefix of another sorts first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split(['.', '-']);
    let mut right = b.split(['.', '-']);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
