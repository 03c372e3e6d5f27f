// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page and page size resolution never fails and never leaves its bounds.

use proptest::prelude::*;
use rurema_search::paginate::{
    ensure_page, resolve_page_size, PageLinkKind, Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    MIN_PAGE_SIZE,
};

proptest! {
    #[test]
    fn prop_page_size_is_clamped(raw in "\\PC{0,8}") {
        let size = resolve_page_size(Some(&raw));
        prop_assert!((MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size));
    }

    #[test]
    fn prop_numeric_page_size_clamps(n in any::<i32>()) {
        let expected = (n as i64).clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as usize;
        prop_assert_eq!(resolve_page_size(Some(&n.to_string())), expected);
    }

    #[test]
    fn prop_effective_page_offset_within_results(
        total in 0usize..10_000,
        page in any::<i64>(),
        size in MIN_PAGE_SIZE..=MAX_PAGE_SIZE,
    ) {
        let effective = ensure_page(total, Some(&page.to_string()), size);
        prop_assert!(effective >= 1);
        prop_assert!(effective == 1 || (effective - 1) * size < total);
        if page < 1 {
            prop_assert_eq!(effective, 1);
        }
    }

    #[test]
    fn prop_link_strip_has_one_current(
        total in 1usize..2_000,
        size in MIN_PAGE_SIZE..=MAX_PAGE_SIZE,
        page in 1usize..200,
    ) {
        let current = ensure_page(total, Some(&page.to_string()), size);
        let pagination = Pagination::new(total, current, size);
        let links = pagination.links();
        if pagination.have_pages() {
            let currents = links.iter().filter(|l| l.kind == PageLinkKind::Current).count();
            prop_assert_eq!(currents, 1);
        } else {
            prop_assert!(links.is_empty());
        }
    }
}

#[test]
fn test_page_clamp_examples() {
    assert_eq!(ensure_page(25, Some("4"), 10), 1);
    assert_eq!(ensure_page(25, Some("-1"), 10), 1);
    assert_eq!(ensure_page(25, Some("abc"), 10), 1);
    assert_eq!(ensure_page(25, Some("3"), 10), 3);
}

#[test]
fn test_page_one_past_exact_multiple() {
    assert_eq!(ensure_page(20, Some("3"), 10), 1);
    assert_eq!(ensure_page(20, Some("2"), 10), 2);
    let pagination = Pagination::new(20, ensure_page(20, Some("3"), 10), 10);
    assert_eq!((pagination.current_page, pagination.n_pages), (1, 2));
    assert_eq!(pagination.window().offset, 0);
}

#[test]
fn test_empty_results_stay_on_first_page() {
    for raw in ["1", "2", "9"] {
        assert_eq!(ensure_page(0, Some(raw), 10), 1);
    }
    let pagination = Pagination::new(0, ensure_page(0, Some("2"), 10), 10);
    assert_eq!(pagination.n_pages, 1);
    assert!(pagination.links().is_empty());
}

#[test]
fn test_page_size_examples() {
    assert_eq!(resolve_page_size(Some("5")), 10);
    assert_eq!(resolve_page_size(Some("500")), 100);
    assert_eq!(resolve_page_size(Some("bogus")), DEFAULT_PAGE_SIZE);
    assert_eq!(resolve_page_size(None), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_seven_page_strip_from_first_page() {
    let pagination = Pagination::new(70, 1, 10);
    let links = pagination.links();
    let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["<<", "1", "2", "3", "...", ">", ">>"]);
    assert_eq!(links[6].href.as_deref(), Some("?page=7;n_entries=10"));
}

#[test]
fn test_two_page_strip() {
    let pagination = Pagination::new(15, 2, 10);
    let links = pagination.links();
    let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["<<", "<", "1", "2", ">>"]);
    assert_eq!(links[2].href.as_deref(), Some("./?n_entries=10"));
}
