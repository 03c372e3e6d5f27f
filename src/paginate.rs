// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page numbers, page sizes and the link strip under the results.
//!
//! Bad `page` and `n_entries` values are never errors. A page we can't use
//! becomes page 1 and a size we can't read becomes the default, because these
//! come from query strings people edit by hand.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MIN_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Pages on either side of the current one that get their own link.
const LINK_DISTANCE: usize = 2;

/// Parse `n_entries`: unreadable means the default, anything else is clamped
/// into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
pub fn resolve_page_size(raw: Option<&str>) -> usize {
    match raw.and_then(|value| value.trim().parse::<i64>().ok()) {
        Some(size) => size.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as usize,
        None => DEFAULT_PAGE_SIZE,
    }
}

/// Parse `page` against the result size.
///
/// Returns 1 for an absent, empty or unreadable value, a value below 1, and a
/// page past the last one. A page starting exactly at `total` is past the end
/// too: it would be empty.
pub fn ensure_page(total: usize, raw: Option<&str>, page_size: usize) -> usize {
    let Some(page) = raw.and_then(|value| value.trim().parse::<i64>().ok()) else {
        return 1;
    };
    if page < 1 {
        return 1;
    }
    let page = page as u64;
    let offset = (page - 1).saturating_mul(page_size as u64);
    if page > 1 && offset >= total as u64 {
        return 1;
    }
    page as usize
}

/// Offset/limit slice of the ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Window {
    pub fn for_page(page: usize, page_size: usize) -> Self {
        Window {
            offset: page.saturating_sub(1) * page_size,
            limit: page_size,
        }
    }

    /// The index range this window covers in a list of `len` items.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = self.offset.saturating_add(self.limit).min(len);
        start..end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLinkKind {
    Text,
    Current,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub kind: PageLinkKind,
    pub label: String,
    pub href: Option<String>,
}

impl PageLink {
    fn text(label: &str) -> Self {
        PageLink {
            kind: PageLinkKind::Text,
            label: label.to_string(),
            href: None,
        }
    }

    fn link(label: impl Into<String>, href: String) -> Self {
        PageLink {
            kind: PageLinkKind::Link,
            label: label.into(),
            href: Some(href),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total: usize,
    pub n_pages: usize,
}

impl Pagination {
    pub fn new(total: usize, current_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let n_pages = total.div_ceil(page_size).max(1);
        Pagination {
            current_page: current_page.clamp(1, n_pages),
            page_size,
            total,
            n_pages,
        }
    }

    pub fn window(&self) -> Window {
        Window::for_page(self.current_page, self.page_size)
    }

    pub fn have_pages(&self) -> bool {
        self.n_pages > 1
    }

    pub fn first_page(&self) -> usize {
        1
    }

    pub fn last_page(&self) -> usize {
        self.n_pages
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.n_pages
    }

    pub fn previous_page(&self) -> Option<usize> {
        (!self.is_first_page()).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (!self.is_last_page()).then(|| self.current_page + 1)
    }

    /// Relative href for a page, carrying a non-default page size along.
    pub fn page_href(&self, page: usize) -> String {
        let custom_size = self.page_size != DEFAULT_PAGE_SIZE;
        if page == 1 {
            if custom_size {
                format!("./?n_entries={}", self.page_size)
            } else {
                "./".to_string()
            }
        } else if custom_size {
            format!("?page={};n_entries={}", page, self.page_size)
        } else {
            format!("?page={}", page)
        }
    }

    /// The `<< < 1 2 3 ... > >>` strip. Empty when everything fits one page.
    pub fn links(&self) -> Vec<PageLink> {
        if !self.have_pages() {
            return Vec::new();
        }
        let mut links = Vec::new();
        match self.previous_page() {
            None => links.push(PageLink::text("<<")),
            Some(previous) => {
                links.push(PageLink::link("<<", self.page_href(self.first_page())));
                links.push(PageLink::link("<", self.page_href(previous)));
            }
        }

        let mut skipped = false;
        for page in 1..=self.n_pages {
            if page == self.current_page {
                links.push(PageLink {
                    kind: PageLinkKind::Current,
                    label: page.to_string(),
                    href: None,
                });
            } else if page.abs_diff(self.current_page) <= LINK_DISTANCE {
                if skipped {
                    links.push(PageLink::text("..."));
                    skipped = false;
                }
                links.push(PageLink::link(page.to_string(), self.page_href(page)));
            } else {
                skipped = true;
            }
        }
        if skipped {
            links.push(PageLink::text("..."));
        }

        match self.next_page() {
            None => links.push(PageLink::text(">>")),
            Some(next) => {
                links.push(PageLink::link(">", self.page_href(next)));
                links.push(PageLink::link(">>", self.page_href(self.last_page())));
            }
        }
        links
    }
}
